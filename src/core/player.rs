//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Sanguine is strictly two-player: `Red` plays from the left edge of the
//! board and moves first, `Blue` plays from the right edge.
//!
//! ## PlayerMap
//!
//! One slot per player with O(1) access, indexable by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// Left side, moves first.
    Red,
    /// Right side.
    Blue,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::Red, Player::Blue];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// 0 for Red, 1 for Blue.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Red => 0,
            Player::Blue => 1,
        }
    }

    /// Single-letter tag used by the text renderer.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Player::Red => 'R',
            Player::Blue => 'B',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Blue => write!(f, "Blue"),
        }
    }
}

/// Per-player data storage.
///
/// ## Example
///
/// ```
/// use sanguine::core::{Player, PlayerMap};
///
/// let mut pawns: PlayerMap<u32> = PlayerMap::new(|_| 3);
/// pawns[Player::Blue] = 5;
///
/// assert_eq!(pawns[Player::Red], 3);
/// assert_eq!(pawns[Player::Blue], 5);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::Red), factory(Player::Blue)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Player, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Player, &mut T)> {
        Player::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
