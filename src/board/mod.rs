//! Board model: cells and the grid they live on.
//!
//! - `Cell`: `Empty`, `PawnCluster` or a placed `Card`
//! - `PawnCluster`: one to three pawns owned by a player
//! - `Board`: the grid, with placement and influence application

pub mod cell;
pub mod grid;

pub use cell::{Cell, PawnCluster, MAX_PAWNS};
pub use grid::Board;
