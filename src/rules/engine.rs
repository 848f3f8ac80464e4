//! The game engine.
//!
//! `SanguineModel` owns the board, both players' decks and hands, and the turn
//! state. Drivers interact with it in a fixed rhythm:
//!
//! 1. `configure` with two decks
//! 2. `start_game`
//! 3. per turn: `draw_card`, optionally `place_card`, then `switch_player`
//! 4. `end_game` once `is_game_over` reports true
//!
//! Strategies and views only see the `ReadOnlyModel` surface.

use std::cell::RefCell;
use std::rc::Weak;

use im::Vector;

use crate::board::{Board, Cell};
use crate::cards::CardEntry;
use crate::core::{ConfigError, DeckExhausted, GameConfig, GameRng, PlacementError, Player};
use crate::triggers::{GameEvent, ListenerId, ListenerRegistry, ModelListener};
use crate::zones::ZoneManager;

use super::lifecycle::{Phase, TurnState};
use super::scoring::{self, GameResult};

/// Query surface of the engine. Every method returns a copy.
pub trait ReadOnlyModel {
    /// Snapshot of the board.
    fn board(&self) -> Board;

    /// Copy of `player`'s hand.
    fn hand(&self, player: Player) -> Vector<CardEntry>;

    /// Copy of `player`'s remaining deck.
    fn deck(&self, player: Player) -> Vector<CardEntry>;

    /// Total of the rows `player` wins outright.
    fn score(&self, player: Player) -> u32;

    /// Card value `player` holds in `row`.
    fn row_score(&self, row: usize, player: Player) -> u32;

    fn winner(&self) -> Option<Player>;

    fn is_game_over(&self) -> bool;

    fn current_player(&self) -> Player;

    fn phase(&self) -> Phase;

    fn num_rows(&self) -> usize;

    fn num_columns(&self) -> usize;

    /// Hand size dealt at configuration.
    fn num_hands(&self) -> usize;

    /// Check whether `card` may be placed on `cell`.
    fn can_be_placed(&self, card: &CardEntry, cell: &Cell) -> bool {
        Board::can_be_placed(card, cell)
    }
}

/// Two-player game state and rules.
///
/// ## Example
///
/// ```
/// use sanguine::cards::{CardEntry, InfluenceGrid};
/// use sanguine::core::Player;
/// use sanguine::rules::{ReadOnlyModel, SanguineModel};
///
/// let deck = |owner| -> Vec<CardEntry> {
///     (0..15)
///         .map(|i| CardEntry::new(format!("C{}", i), 1, 1, owner, InfluenceGrid::empty()))
///         .collect()
/// };
///
/// let mut model = SanguineModel::new(3, 5).unwrap();
/// model.configure(3, deck(Player::Red), deck(Player::Blue), false).unwrap();
/// model.start_game();
///
/// model.draw_card().unwrap();
/// model.place_card(0, 0, 0).unwrap();
/// model.switch_player();
///
/// assert_eq!(model.current_player(), Player::Blue);
/// assert_eq!(model.score(Player::Red), 1);
/// ```
#[derive(Debug)]
pub struct SanguineModel {
    board: Board,
    zones: ZoneManager,
    turns: TurnState,
    rng: GameRng,
    listeners: ListenerRegistry,
}

impl SanguineModel {
    /// Create an engine for a `rows` x `cols` board.
    ///
    /// Columns must be odd so the board has a center column.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        Self::from_config(&GameConfig::default().with_board(rows, cols))
    }

    /// Create an engine from a config. Decks still need `configure`.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.rows, config.cols)?;
        Ok(Self {
            zones: ZoneManager::new(config.rows * config.cols),
            turns: TurnState::new(board.clone()),
            board,
            rng: GameRng::new(config.seed),
            listeners: ListenerRegistry::new(),
        })
    }

    /// Check whether a deck could be used on this board.
    #[must_use]
    pub fn is_valid_deck(&self, deck: &[CardEntry]) -> bool {
        self.zones.is_valid_deck(deck)
    }

    /// Validate both decks, optionally shuffle, deal `num_hands` cards each and give Red the move.
    ///
    /// The engine is unchanged on failure.
    pub fn configure(
        &mut self,
        num_hands: usize,
        red_deck: Vec<CardEntry>,
        blue_deck: Vec<CardEntry>,
        shuffle: bool,
    ) -> Result<(), ConfigError> {
        let rng = shuffle.then_some(&self.rng);
        self.zones.configure(num_hands, red_deck, blue_deck, rng)?;
        self.turns.reset_to_red();
        Ok(())
    }

    /// Announce the first player to listeners.
    pub fn start_game(&mut self) {
        let player = self.turns.current_player();
        log::debug!("game started, {} to move", player);
        self.listeners.notify(&GameEvent::TurnSwitch(player));
    }

    /// Current player draws the front card of their deck.
    pub fn draw_card(&mut self) -> Result<(), DeckExhausted> {
        self.zones.draw(self.turns.current_player())
    }

    /// Current player places hand card `hand_index` at `(row, col)`.
    ///
    /// On success the card leaves the hand and its influence is applied. On
    /// failure neither the hand nor the board changes.
    pub fn place_card(&mut self, hand_index: usize, row: usize, col: usize) -> Result<(), PlacementError> {
        let player = self.turns.current_player();
        let card = self
            .zones
            .hand_card(player, hand_index)
            .cloned()
            .ok_or_else(|| PlacementError::HandIndexOutOfRange {
                index: hand_index,
                hand_size: self.zones.hand(player).len(),
            })?;

        self.board.place(card, row, col, player)?;
        self.zones.take_from_hand(player, hand_index);
        Ok(())
    }

    /// End the current turn and notify listeners of the new player.
    pub fn switch_player(&mut self) {
        let next = self.turns.advance(&self.board);
        log::debug!(
            "turn switch, {} to move (no-change streak {})",
            next,
            self.turns.no_change_streak()
        );
        self.listeners.notify(&GameEvent::TurnSwitch(next));
    }

    /// Declare the game over and notify listeners.
    pub fn end_game(&mut self) {
        self.turns.mark_ended();
        log::debug!("game over: {}", self.result());
        self.listeners.notify(&GameEvent::GameOver);
    }

    /// Final or provisional outcome of the board as it stands.
    #[must_use]
    pub fn result(&self) -> GameResult {
        scoring::result(&self.board)
    }

    /// Register a listener. The engine holds it weakly.
    pub fn subscribe(&mut self, listener: Weak<RefCell<dyn ModelListener>>) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Borrow the board without copying.
    #[must_use]
    pub fn board_ref(&self) -> &Board {
        &self.board
    }
}

impl ReadOnlyModel for SanguineModel {
    fn board(&self) -> Board {
        self.board.clone()
    }

    fn hand(&self, player: Player) -> Vector<CardEntry> {
        self.zones.hand(player)
    }

    fn deck(&self, player: Player) -> Vector<CardEntry> {
        self.zones.deck(player)
    }

    fn score(&self, player: Player) -> u32 {
        scoring::score(&self.board, player)
    }

    fn row_score(&self, row: usize, player: Player) -> u32 {
        self.board.row_score(row, player)
    }

    fn winner(&self) -> Option<Player> {
        scoring::winner(&self.board)
    }

    fn is_game_over(&self) -> bool {
        self.turns.is_stalemate() || (self.zones.all_exhausted() && !self.board.has_empty_cells())
    }

    fn current_player(&self) -> Player {
        self.turns.current_player()
    }

    fn phase(&self) -> Phase {
        if self.turns.is_ended() || self.is_game_over() {
            Phase::GameOver
        } else {
            Phase::turn_of(self.turns.current_player())
        }
    }

    fn num_rows(&self) -> usize {
        self.board.num_rows()
    }

    fn num_columns(&self) -> usize {
        self.board.num_columns()
    }

    fn num_hands(&self) -> usize {
        self.zones.num_hands()
    }
}
