//! Card locations: each player's deck and hand.
//!
//! ## Key Types
//!
//! - `ZoneManager`: Deck validation, dealing, drawing, and hand removal
//! - `PlayerZones`: One player's deck and hand
//! - `DeckProblem`: Why a deck was rejected

pub mod manager;

pub use manager::{check_deck, check_deck_slots, DeckProblem, PlayerZones, ZoneManager, HANDS_PER_DECK, MAX_COPIES};
