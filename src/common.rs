//! Common types: guess results and the error taxonomy.

use thiserror::Error;

/// Result of a resolved guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// The targeted cell holds a ship.
    Hit,
    /// The targeted cell is open water.
    Miss,
}

impl GuessResult {
    pub fn is_hit(self) -> bool {
        matches!(self, GuessResult::Hit)
    }
}

/// Errors returned by checked grid access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Row or column index is out of bounds [0..size).
    #[error("cell ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
    /// The board has no cells to draw from.
    #[error("board has no cells")]
    Empty,
}

/// Why a candidate guess was rejected.
///
/// Every variant is recoverable: the caller discards the candidate and asks
/// again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    /// Input was not two whitespace-separated integers.
    #[error("expected two whitespace-separated integers")]
    InvalidFormat,
    /// Coordinate falls outside the board.
    #[error("({row}, {col}) is outside the board")]
    OutOfBounds { row: i64, col: i64 },
    /// Cell has already been targeted.
    #[error("({row}, {col}) has already been hit")]
    AlreadyHit { row: usize, col: usize },
}

/// Errors raised by the game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Guess(#[from] GuessError),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A move was requested for the side that is not on turn.
    #[error("it is not the {0:?} side's turn")]
    OutOfTurn(crate::game::Side),
    /// The game already has a winner.
    #[error("the game is already over")]
    Finished,
}

/// Invalid game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {size} must be between 1 and {max}")]
    InvalidSize { size: usize, max: usize },
    #[error("at least one ship is required")]
    NoShips,
    #[error("cannot place {ships} distinct ships on {cells} cells")]
    TooManyShips { ships: usize, cells: usize },
    /// Player and computer boards must share one size.
    #[error("player board is {player}x{player} but computer board is {computer}x{computer}")]
    MismatchedBoards { player: usize, computer: usize },
}
