use crate::common::ConfigError;

pub const BOARD_SIZE: usize = 5;
pub const NUM_SHIPS: usize = 3;

/// Largest supported board edge.
pub const MAX_BOARD_SIZE: usize = 26;

/// Switches between the classic behaviour and the stricter variants.
///
/// Both flags default to `false`, which reproduces the classic game: ship
/// draws may collide, and the computer has no memory of its own guesses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Policy {
    /// Place exactly the requested number of distinct ships.
    pub guarantee_distinct_ships: bool,
    /// Never let the computer target a cell that is already hit.
    pub computer_avoids_repeats: bool,
}

/// Dimensions and rules for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub size: usize,
    pub ships: usize,
    pub policy: Policy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            ships: NUM_SHIPS,
            policy: Policy::default(),
        }
    }
}

impl GameConfig {
    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_size(self.size)?;
        if self.ships == 0 {
            return Err(ConfigError::NoShips);
        }
        let cells = self.size * self.size;
        if self.policy.guarantee_distinct_ships && self.ships > cells {
            return Err(ConfigError::TooManyShips {
                ships: self.ships,
                cells,
            });
        }
        Ok(())
    }
}

/// Board edges must lie in `1..=MAX_BOARD_SIZE`.
pub fn validate_size(size: usize) -> Result<(), ConfigError> {
    if size == 0 || size > MAX_BOARD_SIZE {
        Err(ConfigError::InvalidSize {
            size,
            max: MAX_BOARD_SIZE,
        })
    } else {
        Ok(())
    }
}
