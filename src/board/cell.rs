//! Board occupants.
//!
//! A cell holds nothing, a cluster of one to three pawns, or a played card.
//! Cluster sizes are kept in range by construction: every operation that would
//! leave a cluster with no pawns returns `None` so the caller clears the cell.

use serde::{Deserialize, Serialize};

use crate::cards::{CardEntry, InfluenceStrength};
use crate::core::Player;

/// Largest number of pawns a cluster can hold.
pub const MAX_PAWNS: u8 = 3;

/// One to three pawns owned by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PawnCluster {
    owner: Player,
    count: u8,
}

impl PawnCluster {
    /// Create a cluster; `None` unless `count` is in `1..=3`.
    #[must_use]
    pub fn new(owner: Player, count: u8) -> Option<Self> {
        (1..=MAX_PAWNS).contains(&count).then_some(Self { owner, count })
    }

    /// A single pawn, as seeded on the board edges.
    #[must_use]
    pub const fn single(owner: Player) -> Self {
        Self { owner, count: 1 }
    }

    /// Cluster created on an empty cell by an influence of the given strength.
    ///
    /// Strength 1 or 2 gives that many pawns, 3 or more saturates at 3, and
    /// zero or negative creates nothing.
    #[must_use]
    pub fn from_strength(owner: Player, strength: InfluenceStrength) -> Option<Self> {
        Self::clamped(owner, i64::from(strength.delta()))
    }

    fn clamped(owner: Player, count: i64) -> Option<Self> {
        if count <= 0 {
            return None;
        }
        let count = count.min(i64::from(MAX_PAWNS)) as u8;
        Some(Self { owner, count })
    }

    /// Owning player.
    #[must_use]
    pub fn owner(&self) -> Player {
        self.owner
    }

    /// Number of pawns, always in `1..=3`.
    #[must_use]
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Cluster after an influence from `source`.
    ///
    /// An opposing source takes ownership and leaves the count alone. A friendly
    /// source adds its strength, saturating at 3; `None` when the count would
    /// drop to zero or below.
    #[must_use]
    pub fn influenced(self, source: Player, strength: InfluenceStrength) -> Option<Self> {
        if self.owner != source {
            return Some(Self { owner: source, ..self });
        }
        Self::clamped(self.owner, i64::from(self.count) + i64::from(strength.delta()))
    }
}

/// Occupant of one board position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    PawnCluster(PawnCluster),
    Card(CardEntry),
}

impl Cell {
    /// Check whether the cell has no occupant.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Owner of the occupant, if any.
    #[must_use]
    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PawnCluster(cluster) => Some(cluster.owner()),
            Cell::Card(card) => Some(card.owner()),
        }
    }

    /// Cell after an influence from `source`. Cards are unaffected.
    #[must_use]
    pub fn influenced(self, source: Player, strength: InfluenceStrength) -> Cell {
        let cluster = match self {
            Cell::Empty => PawnCluster::from_strength(source, strength),
            Cell::PawnCluster(cluster) => cluster.influenced(source, strength),
            card @ Cell::Card(_) => return card,
        };
        cluster.map_or(Cell::Empty, Cell::PawnCluster)
    }
}

impl From<PawnCluster> for Cell {
    fn from(cluster: PawnCluster) -> Self {
        Cell::PawnCluster(cluster)
    }
}
