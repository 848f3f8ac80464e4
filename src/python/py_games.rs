//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::load_deck;
use crate::core::{GameConfig, Player};
use crate::rules::{ReadOnlyModel, SanguineModel};
use crate::view::TextView;

use super::py_core::PyPlayer;

fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for a configured Sanguine game.
///
/// Turns are played by hand: `draw`, then `place` or nothing, then `pass_turn`.
#[pyclass(name = "SanguineGame", unsendable)]
pub struct PySanguineGame {
    model: SanguineModel,
}

#[pymethods]
impl PySanguineGame {
    /// Load both decks from files and deal opening hands.
    ///
    /// # Arguments
    /// - red_deck / blue_deck: Paths to deck files
    /// - rows, cols: Board size (cols odd)
    /// - hand_size: Cards dealt to each hand
    /// - shuffle: Shuffle decks before dealing
    /// - seed: Shuffle seed
    #[new]
    #[pyo3(signature = (
        red_deck,
        blue_deck,
        rows = 3,
        cols = 5,
        hand_size = 5,
        shuffle = false,
        seed = 42
    ))]
    fn new(
        red_deck: &str,
        blue_deck: &str,
        rows: usize,
        cols: usize,
        hand_size: usize,
        shuffle: bool,
        seed: u64,
    ) -> PyResult<Self> {
        let config = GameConfig::default()
            .with_board(rows, cols)
            .with_hand_size(hand_size)
            .with_shuffle(shuffle)
            .with_seed(seed);
        let red = load_deck(red_deck, Player::Red).map_err(value_error)?;
        let blue = load_deck(blue_deck, Player::Blue).map_err(value_error)?;

        let mut model = SanguineModel::from_config(&config).map_err(value_error)?;
        model
            .configure(config.hand_size, red, blue, config.shuffle)
            .map_err(value_error)?;
        model.start_game();
        Ok(Self { model })
    }

    /// Draw for the current player. Returns False if their deck is empty.
    fn draw(&mut self) -> bool {
        self.model.draw_card().is_ok()
    }

    /// Place a hand card for the current player. Raises ValueError if illegal.
    fn place(&mut self, hand_index: usize, row: usize, col: usize) -> PyResult<()> {
        self.model.place_card(hand_index, row, col).map_err(value_error)
    }

    /// End the current turn. Ends the game if it is now over.
    ///
    /// Returns True once the game is over.
    fn pass_turn(&mut self) -> bool {
        self.model.switch_player();
        let over = self.model.is_game_over();
        if over {
            self.model.end_game();
        }
        over
    }

    /// Get the player to move.
    #[getter]
    fn current_player(&self) -> PyPlayer {
        PyPlayer(self.model.current_player())
    }

    /// Names of the cards in a player's hand.
    fn hand(&self, player: &PyPlayer) -> Vec<String> {
        self.model
            .hand(player.0)
            .iter()
            .map(|card| card.name().to_string())
            .collect()
    }

    fn score(&self, player: &PyPlayer) -> u32 {
        self.model.score(player.0)
    }

    /// Winner, or None on a tie.
    fn winner(&self) -> Option<PyPlayer> {
        self.model.winner().map(PyPlayer)
    }

    fn is_game_over(&self) -> bool {
        self.model.is_game_over()
    }

    /// Text rendering of the board.
    fn render(&self) -> String {
        TextView::render(&self.model)
    }

    fn __repr__(&self) -> String {
        format!(
            "SanguineGame({}x{}, to_move={}, phase={:?})",
            self.model.num_rows(),
            self.model.num_columns(),
            self.model.current_player(),
            self.model.phase()
        )
    }
}
