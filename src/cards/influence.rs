//! Influence patterns carried by cards.
//!
//! Every card has a fixed 5x5 influence grid. The center cell `[2][2]` is the
//! card itself; every other populated cell describes the effect placing the card
//! has on the board cell at the matching offset.
//!
//! Grids are plain arrays owned by value, so two cards never share storage.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Width and height of an influence grid.
pub const INFLUENCE_SIZE: usize = 5;

/// Index of the center row/column (the card's own cell).
pub const INFLUENCE_CENTER: usize = INFLUENCE_SIZE / 2;

/// Pawn delta carried by one influence cell.
///
/// Usually `1`. Larger values grow clusters faster; zero or negative values are
/// representable and shrink (or remove) same-owner clusters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InfluenceStrength(pub i32);

impl InfluenceStrength {
    /// The strength every `I` in a deck file produces.
    pub const UNIT: Self = Self(1);

    /// Create a new strength.
    #[must_use]
    pub const fn new(delta: i32) -> Self {
        Self(delta)
    }

    /// Raw pawn delta.
    #[must_use]
    pub const fn delta(self) -> i32 {
        self.0
    }
}

impl Default for InfluenceStrength {
    fn default() -> Self {
        Self::UNIT
    }
}

/// One populated grid cell expressed relative to the card's position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfluenceOffset {
    pub d_row: isize,
    pub d_col: isize,
    pub strength: InfluenceStrength,
}

/// Immutable 5x5 influence pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InfluenceGrid {
    cells: [[Option<InfluenceStrength>; INFLUENCE_SIZE]; INFLUENCE_SIZE],
}

impl InfluenceGrid {
    /// A grid with no influence at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a grid from explicit cells.
    #[must_use]
    pub const fn from_cells(cells: [[Option<InfluenceStrength>; INFLUENCE_SIZE]; INFLUENCE_SIZE]) -> Self {
        Self { cells }
    }

    /// Build a grid from five text rows where `I` marks a unit influence.
    ///
    /// Short rows leave their trailing cells empty; characters past the fifth
    /// column are ignored.
    ///
    /// ```
    /// use sanguine::cards::{InfluenceGrid, InfluenceStrength};
    ///
    /// let grid = InfluenceGrid::from_pattern([
    ///     "XXXXX",
    ///     "XXIXX",
    ///     "XICIX",
    ///     "XXIXX",
    ///     "XXXXX",
    /// ]);
    /// assert_eq!(grid.get(1, 2), Some(InfluenceStrength::UNIT));
    /// assert_eq!(grid.get(0, 0), None);
    /// ```
    #[must_use]
    pub fn from_pattern<S: AsRef<str>>(rows: [S; INFLUENCE_SIZE]) -> Self {
        let mut cells = [[None; INFLUENCE_SIZE]; INFLUENCE_SIZE];
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.as_ref().chars().take(INFLUENCE_SIZE).enumerate() {
                if ch == 'I' {
                    cells[r][c] = Some(InfluenceStrength::UNIT);
                }
            }
        }
        Self { cells }
    }

    /// Influence at grid position `(row, col)`; `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<InfluenceStrength> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    /// Copy of the grid with `(row, col)` set.
    #[must_use]
    pub fn with_cell(mut self, row: usize, col: usize, strength: Option<InfluenceStrength>) -> Self {
        self.cells[row][col] = strength;
        self
    }

    /// Left-right mirror image, used for Blue's copy of a pattern.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let mut cells = self.cells;
        for row in &mut cells {
            row.reverse();
        }
        Self { cells }
    }

    /// Populated cells other than the center, as offsets from the card.
    #[must_use]
    pub fn offsets(&self) -> SmallVec<[InfluenceOffset; 8]> {
        let mut out = SmallVec::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if r == INFLUENCE_CENTER && c == INFLUENCE_CENTER {
                    continue;
                }
                if let Some(strength) = *cell {
                    out.push(InfluenceOffset {
                        d_row: r as isize - INFLUENCE_CENTER as isize,
                        d_col: c as isize - INFLUENCE_CENTER as isize,
                        strength,
                    });
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cross() -> InfluenceGrid {
        InfluenceGrid::from_pattern(["XXXXX", "XXIXX", "XICIX", "XXIXX", "XXXXX"])
    }

    #[test]
    fn test_from_pattern() {
        let grid = cross();
        assert_eq!(grid.get(1, 2), Some(InfluenceStrength::UNIT));
        assert_eq!(grid.get(2, 1), Some(InfluenceStrength::UNIT));
        assert_eq!(grid.get(2, 2), None);
        assert_eq!(grid.get(5, 0), None);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let grid = InfluenceGrid::from_pattern(["I", "", "XXXXXI", "", "XXXXI"]);
        assert_eq!(grid.get(0, 0), Some(InfluenceStrength::UNIT));
        assert_eq!(grid.offsets().len(), 2);
    }

    #[test]
    fn test_offsets_skip_center() {
        let grid = cross().with_cell(2, 2, Some(InfluenceStrength::new(3)));
        let offsets = grid.offsets();

        assert_eq!(offsets.len(), 4);
        assert!(offsets.iter().all(|o| (o.d_row, o.d_col) != (0, 0)));
        assert_eq!(
            offsets[0],
            InfluenceOffset { d_row: -1, d_col: 0, strength: InfluenceStrength::UNIT }
        );
    }

    #[test]
    fn test_mirrored() {
        let grid = InfluenceGrid::from_pattern(["IXXXX", "XXXXX", "XXCXI", "XXXXX", "XXXXX"]);
        let mirrored = grid.mirrored();

        assert_eq!(mirrored.get(0, 4), Some(InfluenceStrength::UNIT));
        assert_eq!(mirrored.get(2, 0), Some(InfluenceStrength::UNIT));
        assert_eq!(mirrored.get(0, 0), None);
        assert_eq!(mirrored.mirrored(), grid);
    }

    #[test]
    fn test_symmetric_pattern_mirrors_to_itself() {
        assert_eq!(cross().mirrored(), cross());
    }

    #[test]
    fn test_grids_do_not_alias() {
        let original = cross();
        let changed = original.with_cell(0, 0, Some(InfluenceStrength::new(2)));

        assert_eq!(original.get(0, 0), None);
        assert_eq!(changed.get(0, 0), Some(InfluenceStrength::new(2)));
    }
}
