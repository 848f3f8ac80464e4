//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::Player;

/// Python wrapper for Player.
#[pyclass(name = "Player")]
#[derive(Clone, Copy, Debug)]
pub struct PyPlayer(pub Player);

#[pymethods]
impl PyPlayer {
    /// The left-side player, who moves first.
    #[staticmethod]
    fn red() -> Self {
        Self(Player::Red)
    }

    /// The right-side player.
    #[staticmethod]
    fn blue() -> Self {
        Self(Player::Blue)
    }

    fn opponent(&self) -> Self {
        Self(self.0.opponent())
    }

    /// "Red" or "Blue".
    #[getter]
    fn name(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Player.{}", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.index() as u64
    }
}
