//! Playing full matches.
//!
//! - `Agent`: chooses a move or passes
//! - `MachineAgent`: wraps a `Strategy`
//! - `MatchRunner`: draw, move, switch until the game ends

pub mod runner;

pub use runner::{Agent, MachineAgent, MatchRunner, MatchSummary};
