// Computer target selection. Uniform random, no strategy.

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;

/// Pick the computer's next target on `board`.
///
/// Without `avoid_repeats` the draw is independent of earlier guesses and may
/// land on a cell that is already hit. With it, the target is drawn uniformly
/// from the cells not yet hit; if every cell is hit, it falls back to a plain
/// draw. A board without cells yields [`BoardError::Empty`].
pub fn computer_target<R: Rng + ?Sized>(
    rng: &mut R,
    board: &Board,
    avoid_repeats: bool,
) -> Result<(usize, usize), BoardError> {
    if avoid_repeats {
        if let Some(target) = board.unhit_cells().choose(rng) {
            return Ok(target);
        }
    }
    random_cell(rng, board.size())
}

/// Uniform draw over an `size`×`size` grid.
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Result<(usize, usize), BoardError> {
    if size == 0 {
        return Err(BoardError::Empty);
    }
    Ok((rng.random_range(0..size), rng.random_range(0..size)))
}
