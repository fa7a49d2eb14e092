//! Headless games where both sides guess at random.

use rand::Rng;

use crate::{
    common::GameError,
    game::{Game, Outcome, Phase},
    targeting::random_cell,
};

/// Result of a game played to the end without a human.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoplaySummary {
    pub outcome: Outcome,
    pub turns: u32,
    pub player_ships_remaining: usize,
    pub computer_ships_remaining: usize,
}

/// Play `game` to completion. The player side draws uniform targets and, like
/// a human at the prompt, redraws whenever a target is rejected.
pub fn autoplay<R: Rng + ?Sized>(game: &mut Game, rng: &mut R) -> Result<AutoplaySummary, GameError> {
    let size = game.computer_board().size();
    let outcome = loop {
        match game.phase() {
            Phase::AwaitingPlayerGuess => {
                let (row, col) = random_cell(rng, size)?;
                match game.player_move(row as i64, col as i64) {
                    Ok(_) | Err(GameError::Guess(_)) => {}
                    Err(e) => return Err(e),
                }
            }
            Phase::AwaitingComputerGuess => {
                game.computer_move(rng)?;
            }
            Phase::Over(outcome) => break outcome,
        }
    };
    Ok(AutoplaySummary {
        outcome,
        turns: game.turns_taken(),
        player_ships_remaining: game.player_board().ships_remaining(),
        computer_ships_remaining: game.computer_board().ships_remaining(),
    })
}
