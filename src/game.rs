//! Game controller: two boards, strict turn alternation and the win check.

use log::{debug, info};
use rand::Rng;

use crate::{
    board::{Board, BoardSetup},
    common::{BoardError, ConfigError, GameError, GuessResult},
    config::{validate_size, GameConfig, Policy},
    guess::validate_guess,
    placement::place_ships,
    targeting::computer_target,
};

/// The two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

/// How a finished game ended, from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Every computer ship was hit.
    Won,
    /// Every player ship was hit.
    Lost,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Where the turn loop currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingPlayerGuess,
    AwaitingComputerGuess,
    Over(Outcome),
}

/// A guess that has been applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub row: usize,
    pub col: usize,
    pub result: GuessResult,
    /// The cell had already been hit before this shot.
    pub repeat: bool,
}

/// Core game logic holding both boards and the turn state.
#[derive(Debug, Clone)]
pub struct Game {
    player_board: Board,
    computer_board: Board,
    policy: Policy,
    phase: Phase,
    turns_completed: u32,
}

impl Game {
    /// Set up a new game: validate the configuration and place ships on both
    /// boards, player first, from the same random stream.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, GameError> {
        config.validate()?;
        let distinct = config.policy.guarantee_distinct_ships;
        let player_board = Self::random_board(rng, config, distinct)?;
        let computer_board = Self::random_board(rng, config, distinct)?;
        info!(
            "new {}x{} game: player has {} ships, computer has {}",
            config.size,
            config.size,
            player_board.ship_count(),
            computer_board.ship_count()
        );
        Ok(Self::with_boards(player_board, computer_board, config.policy)?)
    }

    fn random_board<R: Rng + ?Sized>(
        rng: &mut R,
        config: &GameConfig,
        distinct: bool,
    ) -> Result<Board, BoardError> {
        let mut setup = BoardSetup::new(config.size);
        place_ships(rng, &mut setup, config.ships, distinct)?;
        Ok(setup.finish())
    }

    /// Start a game from boards whose ships are already laid out. Both boards
    /// must have the same size, within `1..=MAX_BOARD_SIZE`.
    pub fn with_boards(
        player_board: Board,
        computer_board: Board,
        policy: Policy,
    ) -> Result<Self, ConfigError> {
        if player_board.size() != computer_board.size() {
            return Err(ConfigError::MismatchedBoards {
                player: player_board.size(),
                computer: computer_board.size(),
            });
        }
        validate_size(player_board.size())?;
        Ok(Self {
            player_board,
            computer_board,
            policy,
            phase: Phase::AwaitingPlayerGuess,
            turns_completed: 0,
        })
    }

    /// The human player's own board.
    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// The board the human player is guessing against.
    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of the turn being played, starting at 1.
    pub fn turn(&self) -> u32 {
        self.turns_completed + 1
    }

    /// Completed human moves.
    pub fn turns_taken(&self) -> u32 {
        self.turns_completed
    }

    /// Side expected to move next, `None` once the game is over.
    pub fn to_move(&self) -> Option<Side> {
        match self.phase {
            Phase::AwaitingPlayerGuess => Some(Side::Player),
            Phase::AwaitingComputerGuess => Some(Side::Computer),
            Phase::Over(_) => None,
        }
    }

    /// Evaluate the current game status from the recorded phase.
    pub fn status(&self) -> GameStatus {
        match self.phase {
            Phase::Over(Outcome::Won) => GameStatus::Won,
            Phase::Over(Outcome::Lost) => GameStatus::Lost,
            _ => GameStatus::InProgress,
        }
    }

    /// Resolve the human player's guess at (row, col) against the computer's
    /// board.
    ///
    /// A rejected guess leaves the game untouched, so the caller can simply ask
    /// again.
    pub fn player_move(&mut self, row: i64, col: i64) -> Result<Shot, GameError> {
        self.expect_turn(Side::Player)?;
        let (row, col) = validate_guess(&self.computer_board, row, col)?;
        let shot = Self::fire(&mut self.computer_board, row, col)?;
        self.turns_completed += 1;
        debug!("turn {}: player fired at {:?}", self.turns_completed, shot);

        self.phase = if self.computer_board.all_ships_hit() {
            Phase::Over(Outcome::Won)
        } else {
            Phase::AwaitingComputerGuess
        };
        Ok(shot)
    }

    /// Let the computer pick and fire at a target on the player's board.
    pub fn computer_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Shot, GameError> {
        self.expect_turn(Side::Computer)?;
        let (row, col) = computer_target(
            rng,
            &self.player_board,
            self.policy.computer_avoids_repeats,
        )?;
        let shot = Self::fire(&mut self.player_board, row, col)?;
        debug!("turn {}: computer fired at {:?}", self.turns_completed, shot);

        self.phase = if self.player_board.all_ships_hit() {
            Phase::Over(Outcome::Lost)
        } else {
            Phase::AwaitingPlayerGuess
        };
        Ok(shot)
    }

    fn expect_turn(&self, side: Side) -> Result<(), GameError> {
        match self.to_move() {
            None => Err(GameError::Finished),
            Some(s) if s == side => Ok(()),
            Some(_) => Err(GameError::OutOfTurn(side)),
        }
    }

    fn fire(board: &mut Board, row: usize, col: usize) -> Result<Shot, BoardError> {
        let cell = board.cell(row, col)?;
        board.mark_cell(row, col)?;
        Ok(Shot {
            row,
            col,
            result: if cell.is_occupied() {
                GuessResult::Hit
            } else {
                GuessResult::Miss
            },
            repeat: cell.is_hit(),
        })
    }
}
