//! Text rendering of a game in progress.

pub mod text;

pub use text::TextView;
