//! Validation of candidate guesses, independent of where the candidate came from.

use crate::board::Board;
use crate::common::GuessError;

/// Parse a line holding exactly two whitespace-separated integers.
pub fn parse_coordinates(line: &str) -> Result<(i64, i64), GuessError> {
    let mut tokens = line.split_whitespace();
    let (Some(row), Some(col), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(GuessError::InvalidFormat);
    };
    let row = row.parse().map_err(|_| GuessError::InvalidFormat)?;
    let col = col.parse().map_err(|_| GuessError::InvalidFormat)?;
    Ok((row, col))
}

/// Accept (row, col) as a target on `board`, or say why not.
///
/// The coordinate must lie on the board and must not have been hit before.
pub fn validate_guess(board: &Board, row: i64, col: i64) -> Result<(usize, usize), GuessError> {
    let size = board.size() as i64;
    if !(0..size).contains(&row) || !(0..size).contains(&col) {
        return Err(GuessError::OutOfBounds { row, col });
    }
    let (row, col) = (row as usize, col as usize);
    match board.is_cell_hit(row, col) {
        Ok(false) => Ok((row, col)),
        Ok(true) => Err(GuessError::AlreadyHit { row, col }),
        Err(_) => Err(GuessError::OutOfBounds {
            row: row as i64,
            col: col as i64,
        }),
    }
}

/// Parse and validate one line of user input.
pub fn check_line(board: &Board, line: &str) -> Result<(usize, usize), GuessError> {
    let (row, col) = parse_coordinates(line)?;
    validate_guess(board, row, col)
}
