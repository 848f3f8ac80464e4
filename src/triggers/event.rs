//! Engine notifications.
//!
//! The engine announces two things: whose turn it now is, and that the game
//! has ended. Observers implement `ModelListener`.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Something observers are told about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// The given player is now to move.
    TurnSwitch(Player),
    /// The game has been declared over.
    GameOver,
}

/// Observer of engine notifications.
///
/// Callbacks run synchronously inside the engine call that produced the
/// event, so they must not call back into the engine.
pub trait ModelListener {
    /// `player` is now to move.
    fn on_turn_switch(&mut self, player: Player);

    /// The game is over.
    fn on_game_over(&mut self);

    /// Dispatch an event to the matching callback.
    fn on_event(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::TurnSwitch(player) => self.on_turn_switch(player),
            GameEvent::GameOver => self.on_game_over(),
        }
    }
}

/// Listener that records every event it receives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of game-over events seen.
    #[must_use]
    pub fn game_overs(&self) -> usize {
        self.events.iter().filter(|e| **e == GameEvent::GameOver).count()
    }
}

impl ModelListener for EventLog {
    fn on_turn_switch(&mut self, player: Player) {
        self.events.push(GameEvent::TurnSwitch(player));
    }

    fn on_game_over(&mut self) {
        self.events.push(GameEvent::GameOver);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_event_dispatch() {
        let mut log = EventLog::new();

        log.on_event(&GameEvent::TurnSwitch(Player::Blue));
        log.on_event(&GameEvent::GameOver);

        assert_eq!(log.events, vec![GameEvent::TurnSwitch(Player::Blue), GameEvent::GameOver]);
        assert_eq!(log.game_overs(), 1);
    }
}
