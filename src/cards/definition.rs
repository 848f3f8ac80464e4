//! Card catalog entries - immutable card data.
//!
//! A `CardEntry` is everything printed on a card: its name, the pawn cost to
//! place it, the value it scores, which player owns it, and its influence
//! pattern. Entries are compared structurally: two independently built entries
//! with identical fields are the same card for duplicate counting.

use serde::{Deserialize, Serialize};

use super::influence::InfluenceGrid;
use crate::core::Player;

/// Immutable playable card.
///
/// ## Example
///
/// ```
/// use sanguine::cards::{CardEntry, InfluenceGrid};
/// use sanguine::core::Player;
///
/// let grid = InfluenceGrid::from_pattern(["XXXXX", "XXIXX", "XICIX", "XXIXX", "XXXXX"]);
/// let security = CardEntry::new("Security", 1, 2, Player::Red, grid);
///
/// assert_eq!(security.cost(), 1);
/// assert_eq!(security, CardEntry::new("Security", 1, 2, Player::Red, grid));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardEntry {
    name: String,
    cost: u32,
    value: u32,
    owner: Player,
    influence: InfluenceGrid,
}

impl CardEntry {
    /// Create a new card entry.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        cost: u32,
        value: u32,
        owner: Player,
        influence: InfluenceGrid,
    ) -> Self {
        Self {
            name: name.into(),
            cost,
            value,
            owner,
            influence,
        }
    }

    /// Card name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pawns required on the target cell.
    #[must_use]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Points the card contributes to its row.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Player the card belongs to.
    #[must_use]
    pub fn owner(&self) -> Player {
        self.owner
    }

    /// Influence pattern, as seen from the owner's side of the board.
    #[must_use]
    pub fn influence(&self) -> &InfluenceGrid {
        &self.influence
    }
}

impl std::fmt::Display for CardEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (cost {}, value {}, {})", self.name, self.cost, self.value, self.owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::InfluenceStrength;

    fn queen(owner: Player) -> CardEntry {
        let grid = InfluenceGrid::from_pattern(["XXIXX", "XXXXX", "XXCXX", "XXXXX", "XXIXX"]);
        CardEntry::new("Queen", 1, 1, owner, grid)
    }

    #[test]
    fn test_accessors() {
        let card = queen(Player::Blue);
        assert_eq!(card.name(), "Queen");
        assert_eq!(card.cost(), 1);
        assert_eq!(card.value(), 1);
        assert_eq!(card.owner(), Player::Blue);
        assert_eq!(card.influence().offsets().len(), 2);
        assert_eq!(card.to_string(), "Queen (cost 1, value 1, Blue)");
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(queen(Player::Red), queen(Player::Red));
        assert_ne!(queen(Player::Red), queen(Player::Blue));

        let altered = CardEntry::new(
            "Queen",
            1,
            1,
            Player::Red,
            queen(Player::Red)
                .influence()
                .with_cell(0, 0, Some(InfluenceStrength::UNIT)),
        );
        assert_ne!(altered, queen(Player::Red));
    }

    #[test]
    fn test_serialization() {
        let card = queen(Player::Red);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
