//! Core engine types: players, configuration, errors, RNG.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Player, PlayerMap};
pub use rng::GameRng;
pub use config::GameConfig;
pub use error::{ConfigError, DeckExhausted, PlacementError};
