//! Error types returned by the engine.
//!
//! Every failure is a typed value handed back to the caller. The engine never
//! retries and never swallows an error; a failed placement leaves the game
//! untouched.

use std::path::PathBuf;

use super::Player;

/// Errors raised while setting up a game.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid board size {rows}x{cols}: rows must be positive and columns positive and odd")]
    InvalidBoardSize { rows: usize, cols: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Errors raised by a card placement. The board is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfRange { row: usize, col: usize },

    #[error("card cannot be placed on cell ({row}, {col})")]
    IllegalPlacement { row: usize, col: usize },

    #[error("hand index {index} out of bounds for hand of {hand_size}")]
    HandIndexOutOfRange { index: usize, hand_size: usize },
}

/// The acting player has nothing left to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{player}'s deck is empty")]
pub struct DeckExhausted {
    pub player: Player,
}
