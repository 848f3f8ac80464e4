//! Game rules: the engine, turn lifecycle, and scoring.
//!
//! `SanguineModel` is the only mutable entry point. Everything a strategy or
//! view needs is on the `ReadOnlyModel` trait.

pub mod engine;
pub mod lifecycle;
pub mod scoring;

pub use engine::{ReadOnlyModel, SanguineModel};
pub use lifecycle::{Phase, TurnState, STALEMATE_THRESHOLD};
pub use scoring::GameResult;
