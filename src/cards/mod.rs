//! Card system: influence patterns, catalog entries, and deck files.
//!
//! ## Key Types
//!
//! - `InfluenceStrength`: Pawn delta of one influence cell
//! - `InfluenceGrid`: Immutable 5x5 pattern centered on the card
//! - `CardEntry`: Immutable card (name, cost, value, owner, influence)
//!
//! Deck files are parsed by `parse_deck` / `load_deck`.

pub mod influence;
pub mod definition;
pub mod loader;

pub use influence::{InfluenceGrid, InfluenceOffset, InfluenceStrength, INFLUENCE_CENTER, INFLUENCE_SIZE};
pub use definition::CardEntry;
pub use loader::{load_deck, parse_deck, DeckParseError};
