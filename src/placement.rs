//! Random ship placement.

use alloc::vec::Vec;
use log::{debug, trace};
use rand::seq::index;
use rand::Rng;

use crate::board::BoardSetup;
use crate::common::BoardError;

/// Put `count` single-cell ships on `setup` and return how many cells were
/// newly occupied.
///
/// With `distinct` unset every ship is an independent uniform draw, so two
/// draws can land on the same cell and the board ends up with fewer than
/// `count` ships. With `distinct` set the ships are sampled without
/// replacement from the open cells, capped at the number of open cells.
/// Asking for ships on a board without cells is [`BoardError::Empty`].
pub fn place_ships<R: Rng + ?Sized>(
    rng: &mut R,
    setup: &mut BoardSetup,
    count: usize,
    distinct: bool,
) -> Result<usize, BoardError> {
    if count > 0 && setup.size() == 0 {
        return Err(BoardError::Empty);
    }
    let placed = if distinct {
        place_distinct(rng, setup, count)?
    } else {
        place_independent(rng, setup, count)?
    };
    debug!(
        "placed {} of {} requested ships on a {}x{} board",
        placed,
        count,
        setup.size(),
        setup.size()
    );
    Ok(placed)
}

fn place_independent<R: Rng + ?Sized>(
    rng: &mut R,
    setup: &mut BoardSetup,
    count: usize,
) -> Result<usize, BoardError> {
    let size = setup.size();
    let mut placed = 0;
    for _ in 0..count {
        let row = rng.random_range(0..size);
        let col = rng.random_range(0..size);
        if setup.set_occupied(row, col)? {
            placed += 1;
        } else {
            trace!("duplicate ship draw at ({}, {})", row, col);
        }
    }
    Ok(placed)
}

fn place_distinct<R: Rng + ?Sized>(
    rng: &mut R,
    setup: &mut BoardSetup,
    count: usize,
) -> Result<usize, BoardError> {
    let open: Vec<(usize, usize)> = setup.open_cells().collect();
    let amount = count.min(open.len());
    let mut placed = 0;
    for i in index::sample(rng, open.len(), amount).into_iter() {
        let (row, col) = open[i];
        if setup.set_occupied(row, col)? {
            placed += 1;
        }
    }
    Ok(placed)
}
