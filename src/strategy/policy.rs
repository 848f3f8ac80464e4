//! Move-selection strategies.
//!
//! - `FillFirst`: first legal placement in hand, row, column order
//! - `MaximizeRowScore`: first placement that wins a row the player is not already winning

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::CardEntry;
use crate::core::Player;
use crate::rules::ReadOnlyModel;

/// A placement: hand slot and target cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub hand_index: usize,
    pub row: usize,
    pub col: usize,
}

impl Move {
    #[must_use]
    pub const fn new(hand_index: usize, row: usize, col: usize) -> Self {
        Self { hand_index, row, col }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card {} at ({}, {})", self.hand_index, self.row, self.col)
    }
}

/// Picks moves for a player from a read-only view of the game.
pub trait Strategy: Send + Sync {
    /// Equally good moves for `player`. Empty means pass.
    fn choose_moves(&self, model: &dyn ReadOnlyModel, player: Player) -> Vec<Move>;
}

fn is_legal(model: &dyn ReadOnlyModel, board: &Board, card: &CardEntry, row: usize, col: usize) -> bool {
    board
        .get(row, col)
        .is_some_and(|cell| model.can_be_placed(card, cell))
}

/// First legal placement found scanning the hand, then rows, then columns.
#[derive(Clone, Copy, Debug, Default)]
pub struct FillFirst;

impl Strategy for FillFirst {
    fn choose_moves(&self, model: &dyn ReadOnlyModel, player: Player) -> Vec<Move> {
        let board = model.board();
        let hand = model.hand(player);

        for (hand_index, card) in hand.iter().enumerate() {
            for row in 0..board.num_rows() {
                for col in 0..board.num_columns() {
                    if is_legal(model, &board, card, row, col) {
                        return vec![Move::new(hand_index, row, col)];
                    }
                }
            }
        }
        Vec::new()
    }
}

/// Wins the topmost row the player is not winning, if any card can.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaximizeRowScore;

impl MaximizeRowScore {
    fn winning_move(
        model: &dyn ReadOnlyModel,
        board: &Board,
        hand: &im::Vector<CardEntry>,
        row: usize,
        own: u32,
        theirs: u32,
    ) -> Option<Move> {
        hand.iter().enumerate().find_map(|(hand_index, card)| {
            if own.saturating_add(card.value()) <= theirs {
                return None;
            }
            (0..board.num_columns())
                .find(|&col| is_legal(model, board, card, row, col))
                .map(|col| Move::new(hand_index, row, col))
        })
    }
}

impl Strategy for MaximizeRowScore {
    fn choose_moves(&self, model: &dyn ReadOnlyModel, player: Player) -> Vec<Move> {
        let board = model.board();
        let hand = model.hand(player);

        for row in 0..board.num_rows() {
            let own = model.row_score(row, player);
            let theirs = model.row_score(row, player.opponent());
            if own > theirs {
                continue;
            }
            if let Some(mv) = Self::winning_move(model, &board, &hand, row, own, theirs) {
                return vec![mv];
            }
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::InfluenceGrid;
    use crate::rules::SanguineModel;

    fn card(name: &str, cost: u32, value: u32, owner: Player) -> CardEntry {
        CardEntry::new(name, cost, value, owner, InfluenceGrid::empty())
    }

    fn model_with_hand(red_front: Vec<CardEntry>) -> SanguineModel {
        let mut red = red_front;
        let filler = 15 - red.len();
        red.extend((0..filler).map(|i| card(&format!("R{}", i), 1, 1, Player::Red)));
        let blue = (0..15).map(|i| card(&format!("B{}", i), 1, 1, Player::Blue)).collect();

        let mut model = SanguineModel::new(3, 5).unwrap();
        model.configure(3, red, blue, false).unwrap();
        model
    }

    #[test]
    fn test_fill_first_skips_unplayable_cards() {
        // Nothing on the opening board hosts a cost-2 card.
        let model = model_with_hand(vec![
            card("Heavy", 2, 5, Player::Red),
            card("Light", 1, 1, Player::Red),
        ]);

        assert_eq!(FillFirst.choose_moves(&model, Player::Red), vec![Move::new(1, 0, 0)]);
    }

    #[test]
    fn test_fill_first_passes_when_stuck() {
        let model = model_with_hand(vec![
            card("A", 3, 1, Player::Red),
            card("B", 3, 1, Player::Red),
            card("C", 3, 1, Player::Red),
        ]);

        assert!(FillFirst.choose_moves(&model, Player::Red).is_empty());
    }

    #[test]
    fn test_maximize_moves_to_next_row_once_winning() {
        let mut model = model_with_hand(Vec::new());
        model.place_card(0, 0, 0).unwrap();

        let moves = MaximizeRowScore.choose_moves(&model, Player::Red);
        assert_eq!(moves, vec![Move::new(0, 1, 0)]);
    }

    #[test]
    fn test_maximize_handles_huge_values() {
        let mut red = vec![card("Giant", 1, u32::MAX, Player::Red)];
        red.extend((0..14).map(|i| card(&format!("R{}", i), 1, 1, Player::Red)));
        let mut blue = vec![card("Giant", 1, u32::MAX, Player::Blue)];
        blue.extend((0..14).map(|i| card(&format!("B{}", i), 1, 1, Player::Blue)));

        let mut model = SanguineModel::new(3, 5).unwrap();
        model.configure(3, red, blue, false).unwrap();
        model.place_card(0, 0, 0).unwrap();
        model.switch_player();
        model.place_card(0, 0, 4).unwrap();

        // Row 0 is tied at the maximum; adding 1 cannot break the tie.
        let moves = MaximizeRowScore.choose_moves(&model, Player::Red);
        assert_eq!(moves, vec![Move::new(0, 1, 0)]);
    }

    #[test]
    fn test_maximize_needs_enough_value() {
        let mut model = model_with_hand(Vec::new());
        // Blue holds row 0 with 1 point; a value-1 Red card would only tie it.
        model.switch_player();
        model.place_card(0, 0, 4).unwrap();

        let moves = MaximizeRowScore.choose_moves(&model, Player::Red);
        assert_eq!(moves, vec![Move::new(0, 1, 0)]);
    }
}
