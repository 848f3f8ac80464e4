//! Plain-text rendering.
//!
//! One line per row: Red's row score, the cells, Blue's row score.
//!
//! ```text
//! 0 1___1 0
//! 1 R___1 0
//! 0 1___B 2
//! ```
//!
//! Cells render as `_` (empty), `1`-`3` (pawn count) or `R`/`B` (card owner).

use std::fmt::Write as _;

use crate::board::Cell;
use crate::core::Player;
use crate::rules::ReadOnlyModel;

/// Renders a game as text.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextView;

impl TextView {
    /// Render the board with per-row scores. No trailing newline.
    #[must_use]
    pub fn render(model: &dyn ReadOnlyModel) -> String {
        let board = model.board();
        board
            .rows()
            .enumerate()
            .map(|(row, cells)| {
                let mut line = String::with_capacity(cells.len() + 8);
                let _ = write!(line, "{} ", model.row_score(row, Player::Red));
                line.extend(cells.iter().map(Self::cell_char));
                let _ = write!(line, " {}", model.row_score(row, Player::Blue));
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// List `player`'s hand, one indexed card per line.
    #[must_use]
    pub fn render_hand(model: &dyn ReadOnlyModel, player: Player) -> String {
        model
            .hand(player)
            .iter()
            .enumerate()
            .map(|(i, card)| format!("{}: {}", i, card))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn cell_char(cell: &Cell) -> char {
        match cell {
            Cell::Empty => '_',
            Cell::PawnCluster(cluster) => char::from(b'0' + cluster.count()),
            Cell::Card(card) => card.owner().initial(),
        }
    }
}
