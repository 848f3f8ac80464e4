//! Deck file parsing.
//!
//! A deck file is a sequence of six-line blocks, one per card:
//!
//! ```text
//! Security 1 2
//! XXXXX
//! XXIXX
//! XICIX
//! XXIXX
//! XXXXX
//! ```
//!
//! The header is `<name> <cost> <value>`; the five rows mark influence cells
//! with `I`. Rows are written from Red's point of view, so Blue's copy of every
//! pattern is mirrored left to right.

use std::path::{Path, PathBuf};

use super::definition::CardEntry;
use super::influence::{InfluenceGrid, INFLUENCE_SIZE};
use crate::core::Player;

const BLOCK_LINES: usize = INFLUENCE_SIZE + 1;

/// Errors raised while reading a deck file.
#[derive(Debug, thiserror::Error)]
pub enum DeckParseError {
    #[error("line {line}: expected `<name> <cost> <value>`, found {found:?}")]
    Header { line: usize, found: String },

    #[error("deck ends mid-card after {cards_read} cards ({lines} lines)")]
    Truncated { cards_read: usize, lines: usize },

    #[error("failed to read deck file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Parse deck text into cards owned by `owner`.
pub fn parse_deck(text: &str, owner: Player) -> Result<Vec<CardEntry>, DeckParseError> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }

    if lines.len() % BLOCK_LINES != 0 {
        return Err(DeckParseError::Truncated {
            cards_read: lines.len() / BLOCK_LINES,
            lines: lines.len(),
        });
    }

    let deck = lines
        .chunks(BLOCK_LINES)
        .enumerate()
        .map(|(i, block)| parse_card(block, i * BLOCK_LINES + 1, owner))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("parsed {} cards for {}", deck.len(), owner);
    Ok(deck)
}

/// Read and parse a deck file.
pub fn load_deck(path: impl AsRef<Path>, owner: Player) -> Result<Vec<CardEntry>, DeckParseError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| DeckParseError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_deck(&text, owner)
}

fn parse_card(block: &[&str], line: usize, owner: Player) -> Result<CardEntry, DeckParseError> {
    let header = block[0];
    let (name, cost, value) = parse_header(header).ok_or_else(|| DeckParseError::Header {
        line,
        found: header.to_string(),
    })?;

    let rows: [&str; INFLUENCE_SIZE] = [block[1], block[2], block[3], block[4], block[5]];
    let grid = InfluenceGrid::from_pattern(rows);
    let grid = match owner {
        Player::Red => grid,
        Player::Blue => grid.mirrored(),
    };

    Ok(CardEntry::new(name, cost, value, owner, grid))
}

fn parse_header(header: &str) -> Option<(&str, u32, u32)> {
    let mut parts = header.split_whitespace();
    let name = parts.next()?;
    let cost = parts.next()?.parse().ok()?;
    let value = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((name, cost, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::InfluenceStrength;

    const TWO_CARDS: &str = "\
Security 1 2
XXXXX
XXIXX
XICIX
XXIXX
XXXXX
Reach 2 3
IXXXX
XXXXX
XXCXX
XXXXX
XXXXX
";

    #[test]
    fn test_parse_red_deck() {
        let deck = parse_deck(TWO_CARDS, Player::Red).unwrap();

        assert_eq!(deck.len(), 2);
        assert_eq!(deck[0].name(), "Security");
        assert_eq!(deck[0].cost(), 1);
        assert_eq!(deck[0].value(), 2);
        assert_eq!(deck[1].influence().get(0, 0), Some(InfluenceStrength::UNIT));
        assert!(deck.iter().all(|c| c.owner() == Player::Red));
    }

    #[test]
    fn test_blue_deck_is_mirrored() {
        let deck = parse_deck(TWO_CARDS, Player::Blue).unwrap();

        assert_eq!(deck[1].owner(), Player::Blue);
        assert_eq!(deck[1].influence().get(0, 4), Some(InfluenceStrength::UNIT));
        assert_eq!(deck[1].influence().get(0, 0), None);
    }

    #[test]
    fn test_truncated_block() {
        let text = "Security 1 2\nXXXXX\nXXIXX\n";
        assert!(matches!(
            parse_deck(text, Player::Red),
            Err(DeckParseError::Truncated { cards_read: 0, lines: 3 })
        ));
    }

    #[test]
    fn test_bad_header() {
        let text = TWO_CARDS.replace("Reach 2 3", "Reach two 3");
        match parse_deck(&text, Player::Red) {
            Err(DeckParseError::Header { line, found }) => {
                assert_eq!(line, 7);
                assert_eq!(found, "Reach two 3");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_text_is_empty_deck() {
        assert!(parse_deck("", Player::Red).unwrap().is_empty());
    }

    #[test]
    fn test_load_deck_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("two.deck");
        std::fs::write(&path, TWO_CARDS).unwrap();

        let deck = load_deck(&path, Player::Red).unwrap();
        assert_eq!(deck.len(), 2);

        let missing = load_deck(dir.path().join("missing.deck"), Player::Red);
        assert!(matches!(missing, Err(DeckParseError::FileRead { .. })));
    }
}
