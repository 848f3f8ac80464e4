//! Game configuration.
//!
//! `GameConfig` carries everything needed to set up a match: the board
//! dimensions, the visible hand size, and how (and whether) decks are shuffled.
//! It can be built in code with the `with_*` methods or loaded from TOML:
//!
//! ```toml
//! rows = 3
//! cols = 5
//! hand_size = 5
//! shuffle = true
//! seed = 7
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Match setup parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of board rows (>= 1).
    pub rows: usize,

    /// Number of board columns (>= 1 and odd, so a center column exists).
    pub cols: usize,

    /// Cards dealt to each hand at configuration.
    pub hand_size: usize,

    /// Shuffle both decks once before dealing.
    pub shuffle: bool,

    /// Seed for the shuffle. Same seed produces the same deck order.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 5,
            hand_size: 5,
            shuffle: false,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the board dimensions.
    #[must_use]
    pub fn with_board(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the number of cards dealt to each hand.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Enable or disable the initial shuffle.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the board dimensions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 || self.cols % 2 == 0 {
            return Err(ConfigError::InvalidBoardSize {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
