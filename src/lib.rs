//! # sanguine
//!
//! Rules engine for Sanguine, a two-player card and board game.
//!
//! Red and Blue start with a column of pawns on opposite edges of an odd-width
//! grid. Each turn a player draws, may place a card on one of their own pawn
//! clusters (or an empty cell, for free cards), and the card's influence pattern
//! spreads pawns to nearby cells, growing friendly clusters and capturing enemy
//! ones. Rows are won by the player with more card value in them.
//!
//! ## Design Principles
//!
//! 1. **One mutable entry point**: `SanguineModel` owns every piece of state.
//!    Strategies and views read it through `ReadOnlyModel`, which hands out copies.
//!
//! 2. **Exhaustive occupants**: a cell is `Empty`, a `PawnCluster` or a `Card`,
//!    and every consumer matches all three.
//!
//! 3. **Persistent Data Structures**: decks and hands are `im` vectors, so copies
//!    handed to readers are O(1) and never alias live state.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, errors, RNG
//! - `cards`: Influence patterns, card entries, deck files
//! - `board`: Cells and the grid, placement and influence
//! - `zones`: Decks and hands
//! - `rules`: The engine, turn lifecycle, scoring
//! - `triggers`: Listener notifications
//! - `strategy`: Computer move selection
//! - `view`: Text rendering
//! - `play`: Agents and the match driver

pub mod core;
pub mod cards;
pub mod board;
pub mod zones;
pub mod rules;
pub mod triggers;
pub mod strategy;
pub mod view;
pub mod play;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerMap,
    GameRng, GameConfig,
    ConfigError, DeckExhausted, PlacementError,
};

pub use crate::cards::{CardEntry, InfluenceGrid, InfluenceStrength, DeckParseError, load_deck, parse_deck};

pub use crate::board::{Board, Cell, PawnCluster};

pub use crate::zones::ZoneManager;

pub use crate::rules::{GameResult, Phase, ReadOnlyModel, SanguineModel};

pub use crate::triggers::{GameEvent, ListenerId, ModelListener};

pub use crate::strategy::{FillFirst, MaximizeRowScore, Move, Strategy};

pub use crate::view::TextView;

pub use crate::play::{Agent, MachineAgent, MatchRunner, MatchSummary};
