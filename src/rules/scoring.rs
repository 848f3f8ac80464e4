//! Scoring and winner resolution.
//!
//! A player scores a row only when their card values in it strictly exceed
//! the opponent's. Tied and lost rows score nothing.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::Player;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{} wins", p),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// Total of `player`'s row scores over the rows they win outright.
///
/// Saturates at `u32::MAX`.
#[must_use]
pub fn score(board: &Board, player: Player) -> u32 {
    (0..board.num_rows())
        .map(|row| {
            let own = board.row_score(row, player);
            let theirs = board.row_score(row, player.opponent());
            if own > theirs {
                own
            } else {
                0
            }
        })
        .fold(0, u32::saturating_add)
}

/// Compare total scores.
#[must_use]
pub fn result(board: &Board) -> GameResult {
    let red = score(board, Player::Red);
    let blue = score(board, Player::Blue);
    match red.cmp(&blue) {
        std::cmp::Ordering::Greater => GameResult::Winner(Player::Red),
        std::cmp::Ordering::Less => GameResult::Winner(Player::Blue),
        std::cmp::Ordering::Equal => GameResult::Draw,
    }
}

/// Player with the strictly higher score.
#[must_use]
pub fn winner(board: &Board) -> Option<Player> {
    result(board).winner()
}
