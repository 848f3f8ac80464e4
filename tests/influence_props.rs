//! Property tests for influence on cells and boards.

use proptest::prelude::*;

use sanguine::board::{Board, Cell, PawnCluster, MAX_PAWNS};
use sanguine::cards::InfluenceStrength;
use sanguine::core::Player;

fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::Red), Just(Player::Blue)]
}

fn cluster() -> impl Strategy<Value = PawnCluster> {
    (player(), 1..=MAX_PAWNS).prop_map(|(owner, count)| PawnCluster::new(owner, count).unwrap())
}

fn cell_counts_in_range(board: &Board) -> bool {
    board.rows().flatten().all(|cell| match cell {
        Cell::PawnCluster(c) => (1..=MAX_PAWNS).contains(&c.count()),
        Cell::Empty | Cell::Card(_) => true,
    })
}

proptest! {
    #[test]
    fn prop_opponent_influence_flips_and_keeps_count(
        start in cluster(),
        delta in -5i32..=5,
    ) {
        let source = start.owner().opponent();
        let after = start.influenced(source, InfluenceStrength::new(delta)).unwrap();
        prop_assert_eq!(after.owner(), source);
        prop_assert_eq!(after.count(), start.count());
    }

    #[test]
    fn prop_friendly_influence_adds_and_saturates(
        start in cluster(),
        delta in -5i32..=5,
    ) {
        let after = start.influenced(start.owner(), InfluenceStrength::new(delta));
        let expected = i32::from(start.count()) + delta;
        match after {
            Some(c) => {
                prop_assert_eq!(c.owner(), start.owner());
                prop_assert_eq!(i32::from(c.count()), expected.min(i32::from(MAX_PAWNS)));
            }
            None => prop_assert!(expected <= 0),
        }
    }

    #[test]
    fn prop_empty_cell_takes_strength(source in player(), delta in -5i32..=5) {
        let cell = Cell::Empty.influenced(source, InfluenceStrength::new(delta));
        if delta <= 0 {
            prop_assert_eq!(cell, Cell::Empty);
        } else {
            let expected = PawnCluster::new(source, delta.min(3) as u8).unwrap();
            prop_assert_eq!(cell, Cell::from(expected));
        }
    }

    #[test]
    fn prop_board_counts_stay_in_range(
        hits in prop::collection::vec((0usize..4, 0usize..6, -3i32..=4, player()), 0..60),
    ) {
        let mut board = Board::new(3, 5).unwrap();
        for (row, col, delta, source) in hits {
            board.apply_influence(InfluenceStrength::new(delta), row, col, source);
        }
        prop_assert!(cell_counts_in_range(&board));
        prop_assert_eq!(board.num_rows(), 3);
        prop_assert_eq!(board.num_columns(), 5);
    }
}
