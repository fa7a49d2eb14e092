use battleship_cells::{autoplay, Game, GameConfig};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let config = GameConfig::default();
    let mut game = Game::new(&config, &mut rng)?;
    let summary = autoplay(&mut game, &mut rng)?;

    let result = json!({
        "seed": seed,
        "config": config,
        "summary": summary,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
