//! Python bindings for the Sanguine engine.
//!
//! # Quick Start
//!
//! ```python
//! import sanguine
//!
//! game = sanguine.SanguineGame("decks/example.deck", "decks/example.deck", hand_size=5)
//! game.draw()
//! game.place(0, 0, 0)
//! game.pass_turn()
//! print(game.render())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// sanguine: rules engine for a two-player card and board game.
#[pymodule]
fn sanguine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayer>()?;
    m.add_class::<PySanguineGame>()?;
    Ok(())
}
