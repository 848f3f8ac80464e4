//! The game board.
//!
//! A rectangular grid of `Cell`s with an odd number of columns. The first
//! column starts with a single Red pawn in every row and the last column with a
//! single Blue pawn; everything in between starts empty.
//!
//! The board is only mutated through `place` (which also applies the card's
//! influence). Readers get an owned clone.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, PawnCluster};
use crate::cards::{CardEntry, InfluenceStrength};
use crate::core::{ConfigError, PlacementError, Player};

/// Grid of cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a freshly seeded board.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 || cols % 2 == 0 {
            return Err(ConfigError::InvalidBoardSize { rows, cols });
        }

        let mut cells = vec![Cell::Empty; rows * cols];
        for row in 0..rows {
            cells[row * cols] = PawnCluster::single(Player::Red).into();
            cells[row * cols + cols - 1] = PawnCluster::single(Player::Blue).into();
        }

        Ok(Self { rows, cols, cells })
    }

    /// Number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.cols
    }

    /// Check whether `(row, col)` is on the board.
    #[must_use]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Cell at `(row, col)`; `None` off the board.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.in_bounds(row, col).then(|| &self.cells[row * self.cols + col])
    }

    /// Cells of one row, left to right. `None` if `row` is out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    /// Check whether any cell is still unoccupied.
    #[must_use]
    pub fn has_empty_cells(&self) -> bool {
        self.cells.iter().any(Cell::is_empty)
    }

    /// Check whether `card` may legally be placed on `cell`.
    ///
    /// Empty cells take only free (cost 0) cards; pawn clusters take cards of
    /// the same owner costing at most the cluster size; cards are never covered.
    #[must_use]
    pub fn can_be_placed(card: &CardEntry, cell: &Cell) -> bool {
        match cell {
            Cell::Empty => card.cost() == 0,
            Cell::PawnCluster(cluster) => {
                cluster.owner() == card.owner() && u32::from(cluster.count()) >= card.cost()
            }
            Cell::Card(_) => false,
        }
    }

    /// Place `card` at `(row, col)` and apply its influence on behalf of `actor`.
    ///
    /// Nothing changes when an error is returned.
    pub fn place(
        &mut self,
        card: CardEntry,
        row: usize,
        col: usize,
        actor: Player,
    ) -> Result<(), PlacementError> {
        let target = self.get(row, col).ok_or(PlacementError::OutOfRange { row, col })?;
        if !Self::can_be_placed(&card, target) {
            return Err(PlacementError::IllegalPlacement { row, col });
        }

        let offsets = card.influence().offsets();
        log::debug!("{} places {} at ({}, {})", actor, card.name(), row, col);
        self.cells[row * self.cols + col] = Cell::Card(card);

        for offset in offsets {
            let target_row = row as isize + offset.d_row;
            let target_col = col as isize + offset.d_col;
            if target_row < 0 || target_col < 0 {
                continue;
            }
            self.apply_influence(offset.strength, target_row as usize, target_col as usize, actor);
        }
        Ok(())
    }

    /// Apply one influence from `source` to `(row, col)`.
    ///
    /// Off-board targets are ignored.
    pub fn apply_influence(&mut self, strength: InfluenceStrength, row: usize, col: usize, source: Player) {
        if !self.in_bounds(row, col) {
            return;
        }
        let index = row * self.cols + col;
        let cell = std::mem::take(&mut self.cells[index]);
        let updated = cell.influenced(source, strength);
        log::trace!("influence {:?} from {} at ({}, {}) -> {:?}", strength, source, row, col, updated);
        self.cells[index] = updated;
    }

    /// Sum of card values owned by `player` in `row`. Pawns score nothing.
    ///
    /// An out-of-range row scores 0. The sum saturates at `u32::MAX`.
    #[must_use]
    pub fn row_score(&self, row: usize, player: Player) -> u32 {
        self.row(row).map_or(0, |cells| {
            cells
                .iter()
                .map(|cell| match cell {
                    Cell::Card(card) if card.owner() == player => card.value(),
                    Cell::Card(_) | Cell::PawnCluster(_) | Cell::Empty => 0,
                })
                .fold(0, u32::saturating_add)
        })
    }
}
