#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_cells::{init_logging, run_session, Console, Game, GameConfig, Outcome, Policy};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};

/// Human vs. computer battleship with single-cell ships.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = battleship_cells::BOARD_SIZE)]
    size: usize,
    #[arg(long, default_value_t = battleship_cells::NUM_SHIPS)]
    ships: usize,
    #[arg(long, help = "Place exactly --ships distinct ships per board")]
    distinct_ships: bool,
    #[arg(long, help = "Stop the computer from firing at cells it already hit")]
    computer_avoids_repeats: bool,
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let config = GameConfig {
        size: cli.size,
        ships: cli.ships,
        policy: Policy {
            guarantee_distinct_ships: cli.distinct_ships,
            computer_avoids_repeats: cli.computer_avoids_repeats,
        },
    };
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("using seed {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut game = Game::new(&config, &mut rng)?;
    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    let outcome = run_session(&mut game, &mut rng, &mut console)?;
    log::debug!(
        "game finished after {} turns: {}",
        game.turns_taken(),
        match outcome {
            Outcome::Won => "player won",
            Outcome::Lost => "computer won",
        }
    );
    Ok(())
}
