//! Deck and hand management.
//!
//! Each player owns an ordered deck (front = next draw) and a hand of visible
//! cards. Cards only ever move forward: deck -> hand -> board.
//!
//! Decks and hands are `im::Vector`s, so handing a copy to a reader is O(1)
//! and the copy can never alias live game state.

use im::Vector;
use rustc_hash::FxHashMap;

use crate::cards::CardEntry;
use crate::core::{ConfigError, DeckExhausted, GameRng, Player, PlayerMap};

/// Most copies of one card a deck may hold.
pub const MAX_COPIES: usize = 2;

/// A deck must hold at least this many hands' worth of cards.
pub const HANDS_PER_DECK: usize = 3;

/// Why a deck was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeckProblem {
    #[error("deck has {size} cards, needs at least {required}")]
    TooFewCards { size: usize, required: usize },

    #[error("deck slot {index} is empty")]
    MissingCard { index: usize },

    #[error("card {name:?} appears {copies} times, at most 2 allowed")]
    TooManyCopies { name: String, copies: usize },
}

/// Check a deck whose slots may be unfilled.
///
/// A deck needs at least `min_size` cards, every slot filled, and no card
/// (by structural equality) more than twice.
pub fn check_deck_slots(deck: &[Option<CardEntry>], min_size: usize) -> Result<(), DeckProblem> {
    if deck.len() < min_size {
        return Err(DeckProblem::TooFewCards {
            size: deck.len(),
            required: min_size,
        });
    }

    let mut copies: FxHashMap<&CardEntry, usize> = FxHashMap::default();
    for (index, slot) in deck.iter().enumerate() {
        let card = slot.as_ref().ok_or(DeckProblem::MissingCard { index })?;
        let count = copies.entry(card).or_insert(0);
        *count += 1;
        if *count > MAX_COPIES {
            return Err(DeckProblem::TooManyCopies {
                name: card.name().to_string(),
                copies: *count,
            });
        }
    }
    Ok(())
}

/// Check a fully populated deck.
pub fn check_deck(deck: &[CardEntry], min_size: usize) -> Result<(), DeckProblem> {
    let slots: Vec<Option<CardEntry>> = deck.iter().cloned().map(Some).collect();
    check_deck_slots(&slots, min_size)
}

/// One player's cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerZones {
    /// Remaining cards, front = next draw.
    pub deck: Vector<CardEntry>,
    /// Cards available to play.
    pub hand: Vector<CardEntry>,
}

/// Decks and hands for both players.
///
/// ## Usage
///
/// ```
/// use sanguine::cards::{CardEntry, InfluenceGrid};
/// use sanguine::core::Player;
/// use sanguine::zones::ZoneManager;
///
/// let deck: Vec<_> = (0..6)
///     .map(|i| CardEntry::new(format!("C{}", i), 1, 1, Player::Red, InfluenceGrid::empty()))
///     .collect();
///
/// let mut zones = ZoneManager::new(6);
/// zones.configure(2, deck.clone(), deck, None).unwrap();
///
/// assert_eq!(zones.hand(Player::Red).len(), 2);
/// assert_eq!(zones.deck(Player::Red).len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneManager {
    zones: PlayerMap<PlayerZones>,
    num_hands: usize,
    min_deck_size: usize,
}

impl ZoneManager {
    /// Create an empty manager for decks of at least `min_deck_size` cards.
    #[must_use]
    pub fn new(min_deck_size: usize) -> Self {
        Self {
            zones: PlayerMap::default(),
            num_hands: 0,
            min_deck_size,
        }
    }

    /// Minimum deck size (one card per board cell).
    #[must_use]
    pub fn min_deck_size(&self) -> usize {
        self.min_deck_size
    }

    /// Hand size dealt at configuration.
    #[must_use]
    pub fn num_hands(&self) -> usize {
        self.num_hands
    }

    /// Check whether a deck is playable.
    #[must_use]
    pub fn is_valid_deck(&self, deck: &[CardEntry]) -> bool {
        check_deck(deck, self.min_deck_size).is_ok()
    }

    /// Validate both decks, optionally shuffle them, and deal opening hands.
    ///
    /// Fails unless both decks are valid and each holds at least
    /// `3 * num_hands` cards. State is untouched on failure.
    pub fn configure(
        &mut self,
        num_hands: usize,
        red_deck: Vec<CardEntry>,
        blue_deck: Vec<CardEntry>,
        shuffle_with: Option<&GameRng>,
    ) -> Result<(), ConfigError> {
        let mut decks: PlayerMap<Vec<CardEntry>> = PlayerMap::default();
        decks[Player::Red] = red_deck;
        decks[Player::Blue] = blue_deck;

        for (player, deck) in decks.iter() {
            check_deck(deck, self.min_deck_size).map_err(|problem| {
                log::warn!("rejecting {} deck: {}", player, problem);
                ConfigError::InvalidConfiguration(format!("{} deck: {}", player, problem))
            })?;
            let required = HANDS_PER_DECK.saturating_mul(num_hands);
            if deck.len() < required {
                log::warn!("rejecting {} deck: hand size {} too large", player, num_hands);
                return Err(ConfigError::InvalidConfiguration(format!(
                    "{} deck has {} cards, hand size {} needs at least {}",
                    player,
                    deck.len(),
                    num_hands,
                    required
                )));
            }
        }

        for (player, deck) in decks.iter_mut() {
            if let Some(rng) = shuffle_with {
                let context = match player {
                    Player::Red => "red-deck",
                    Player::Blue => "blue-deck",
                };
                rng.for_context(context).shuffle(deck);
            }
            let mut deck: Vector<CardEntry> = std::mem::take(deck).into();
            let rest = deck.split_off(num_hands);
            self.zones[player] = PlayerZones { deck: rest, hand: deck };
        }

        self.num_hands = num_hands;
        log::debug!(
            "dealt {} cards per hand; decks hold {} / {}",
            num_hands,
            self.zones[Player::Red].deck.len(),
            self.zones[Player::Blue].deck.len()
        );
        Ok(())
    }

    /// Move the front card of `player`'s deck to the end of their hand.
    pub fn draw(&mut self, player: Player) -> Result<(), DeckExhausted> {
        let zones = &mut self.zones[player];
        let card = zones.deck.pop_front().ok_or(DeckExhausted { player })?;
        log::debug!("{} draws {}", player, card.name());
        zones.hand.push_back(card);
        Ok(())
    }

    /// Card at `index` in `player`'s hand.
    #[must_use]
    pub fn hand_card(&self, player: Player, index: usize) -> Option<&CardEntry> {
        self.zones[player].hand.get(index)
    }

    /// Remove and return the card at `index` in `player`'s hand.
    pub fn take_from_hand(&mut self, player: Player, index: usize) -> Option<CardEntry> {
        let hand = &mut self.zones[player].hand;
        (index < hand.len()).then(|| hand.remove(index))
    }

    /// Copy of `player`'s hand.
    #[must_use]
    pub fn hand(&self, player: Player) -> Vector<CardEntry> {
        self.zones[player].hand.clone()
    }

    /// Copy of `player`'s remaining deck.
    #[must_use]
    pub fn deck(&self, player: Player) -> Vector<CardEntry> {
        self.zones[player].deck.clone()
    }

    /// Check whether every deck and hand is empty.
    #[must_use]
    pub fn all_exhausted(&self) -> bool {
        self.zones
            .iter()
            .all(|(_, z)| z.deck.is_empty() && z.hand.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::InfluenceGrid;

    fn card(name: &str) -> CardEntry {
        CardEntry::new(name, 1, 1, Player::Red, InfluenceGrid::empty())
    }

    fn distinct(n: usize) -> Vec<CardEntry> {
        (0..n).map(|i| card(&format!("C{}", i))).collect()
    }

    #[test]
    fn test_check_deck_too_few() {
        assert_eq!(
            check_deck(&distinct(14), 15),
            Err(DeckProblem::TooFewCards { size: 14, required: 15 })
        );
        assert!(check_deck(&distinct(15), 15).is_ok());
    }

    #[test]
    fn test_check_deck_copies() {
        let mut deck = distinct(13);
        deck.push(card("C0"));
        assert!(check_deck(&deck, 10).is_ok());

        deck.push(card("C0"));
        assert_eq!(
            check_deck(&deck, 10),
            Err(DeckProblem::TooManyCopies { name: "C0".to_string(), copies: 3 })
        );
    }

    #[test]
    fn test_check_deck_missing_slot() {
        let mut slots: Vec<Option<CardEntry>> = distinct(5).into_iter().map(Some).collect();
        slots[3] = None;
        assert_eq!(check_deck_slots(&slots, 5), Err(DeckProblem::MissingCard { index: 3 }));
    }

    #[test]
    fn test_configure_deals_hands() {
        let mut zones = ZoneManager::new(15);
        zones.configure(3, distinct(15), distinct(16), None).unwrap();

        assert_eq!(zones.num_hands(), 3);
        assert_eq!(zones.hand(Player::Red).len(), 3);
        assert_eq!(zones.deck(Player::Red).len(), 12);
        assert_eq!(zones.deck(Player::Blue).len(), 13);
        assert_eq!(zones.hand(Player::Red)[0].name(), "C0");
        assert_eq!(zones.deck(Player::Red)[0].name(), "C3");
    }

    #[test]
    fn test_configure_rejects_large_hand() {
        let mut zones = ZoneManager::new(15);
        let err = zones.configure(6, distinct(17), distinct(17), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration(_)));
        assert_eq!(zones.hand(Player::Red).len(), 0);
    }

    #[test]
    fn test_configure_rejects_invalid_blue_deck() {
        let mut zones = ZoneManager::new(15);
        let err = zones.configure(3, distinct(15), distinct(14), None).unwrap_err();
        assert!(err.to_string().contains("Blue deck"));
    }

    #[test]
    fn test_configure_shuffle_is_seeded() {
        let rng = GameRng::new(11);
        let mut a = ZoneManager::new(15);
        let mut b = ZoneManager::new(15);
        a.configure(3, distinct(20), distinct(20), Some(&rng)).unwrap();
        b.configure(3, distinct(20), distinct(20), Some(&rng)).unwrap();

        assert_eq!(a, b);
        let unshuffled: Vector<CardEntry> = distinct(20).into_iter().skip(3).collect();
        assert_ne!(a.deck(Player::Red), unshuffled);
    }

    #[test]
    fn test_draw_moves_front_card() {
        let mut zones = ZoneManager::new(3);
        zones.configure(1, distinct(3), distinct(3), None).unwrap();

        zones.draw(Player::Red).unwrap();
        assert_eq!(zones.hand(Player::Red).len(), 2);
        assert_eq!(zones.hand(Player::Red)[1].name(), "C1");
        assert_eq!(zones.deck(Player::Red).len(), 1);

        zones.draw(Player::Red).unwrap();
        assert_eq!(zones.draw(Player::Red), Err(DeckExhausted { player: Player::Red }));
        assert_eq!(zones.hand(Player::Blue).len(), 1);
    }

    #[test]
    fn test_take_from_hand() {
        let mut zones = ZoneManager::new(3);
        zones.configure(1, distinct(3), distinct(3), None).unwrap();

        assert!(zones.take_from_hand(Player::Red, 1).is_none());
        let taken = zones.take_from_hand(Player::Red, 0).unwrap();
        assert_eq!(taken.name(), "C0");
        assert!(zones.hand(Player::Red).is_empty());
    }

    #[test]
    fn test_all_exhausted() {
        let mut zones = ZoneManager::new(0);
        assert!(zones.all_exhausted());

        zones.configure(0, vec![card("A")], vec![], None).unwrap();
        assert!(!zones.all_exhausted());
        zones.draw(Player::Red).unwrap();
        zones.take_from_hand(Player::Red, 0).unwrap();
        assert!(zones.all_exhausted());
    }

    #[test]
    fn test_copies_are_detached() {
        let mut zones = ZoneManager::new(3);
        zones.configure(1, distinct(3), distinct(3), None).unwrap();

        let snapshot = zones.hand(Player::Red);
        zones.draw(Player::Red).unwrap();
        assert_eq!(snapshot.len(), 1);
    }
}
