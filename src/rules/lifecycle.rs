//! Turn rotation and stalemate tracking.
//!
//! Each `switch_player` compares the board against the snapshot taken at the
//! previous switch. Two unchanged turns in a row end the game. Once the
//! streak reaches the threshold it never resets, even if the board changes
//! afterwards.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::Player;

/// Consecutive unchanged turns that end the game.
pub const STALEMATE_THRESHOLD: u32 = 2;

/// Coarse game phase reported to drivers and views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    RedTurn,
    BlueTurn,
    GameOver,
}

impl Phase {
    /// Phase in which `player` is to move.
    #[must_use]
    pub const fn turn_of(player: Player) -> Self {
        match player {
            Player::Red => Phase::RedTurn,
            Player::Blue => Phase::BlueTurn,
        }
    }

    /// Player to move, if the game is still running.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Phase::RedTurn => Some(Player::Red),
            Phase::BlueTurn => Some(Player::Blue),
            Phase::GameOver => None,
        }
    }
}

/// Whose turn it is and how long the board has been static.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnState {
    current_player: Player,
    no_change_streak: u32,
    previous_board: Board,
    ended: bool,
}

impl TurnState {
    /// Red to move, with `board` as the first snapshot.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            current_player: Player::Red,
            no_change_streak: 0,
            previous_board: board,
            ended: false,
        }
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[must_use]
    pub fn no_change_streak(&self) -> u32 {
        self.no_change_streak
    }

    /// Check whether the stalemate latch has tripped.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.no_change_streak >= STALEMATE_THRESHOLD
    }

    /// Check whether `end_game` has been called.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Hand the move back to Red.
    pub fn reset_to_red(&mut self) {
        self.current_player = Player::Red;
    }

    pub fn mark_ended(&mut self) {
        self.ended = true;
    }

    /// Record the end of a turn played on `board` and flip the current player.
    ///
    /// Returns the player now to move.
    pub fn advance(&mut self, board: &Board) -> Player {
        if *board == self.previous_board {
            self.no_change_streak += 1;
        } else if self.no_change_streak < STALEMATE_THRESHOLD {
            self.no_change_streak = 0;
        }
        self.current_player = self.current_player.opponent();
        self.previous_board = board.clone();
        self.current_player
    }
}
