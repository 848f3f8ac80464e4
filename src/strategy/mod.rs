//! Computer players.
//!
//! A `Strategy` looks at a `ReadOnlyModel` and proposes placements. It never
//! mutates the game; the turn driver applies the chosen move.

pub mod policy;

pub use policy::{FillFirst, MaximizeRowScore, Move, Strategy};
