//! Turn driver.
//!
//! Runs a full match between two agents: each turn the current player
//! draws, picks a move, places it, and passes the turn. A rejected move is
//! reported back to the agent, which is asked again. The loop stops when the
//! engine reports game over or after `max_turns`.

use serde::{Deserialize, Serialize};

use crate::core::{PlacementError, Player, PlayerMap};
use crate::rules::{GameResult, ReadOnlyModel, SanguineModel};
use crate::strategy::{Move, Strategy};

/// Something that decides a player's move.
pub trait Agent {
    /// Move for `player`, or `None` to pass.
    fn choose_move(&mut self, model: &dyn ReadOnlyModel, player: Player) -> Option<Move>;

    /// Called when the engine rejected `mv`. The agent is then asked again.
    fn on_rejected(&mut self, _mv: Move, _err: &PlacementError) {}

    /// Interactive agents are re-asked until they play or pass.
    /// Others pass after `MatchRunner::max_attempts` rejections.
    fn is_interactive(&self) -> bool {
        false
    }
}

/// Agent that plays the first move its strategy proposes.
#[derive(Clone, Debug, Default)]
pub struct MachineAgent<S: Strategy> {
    strategy: S,
}

impl<S: Strategy> MachineAgent<S> {
    #[must_use]
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    #[must_use]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }
}

impl<S: Strategy> Agent for MachineAgent<S> {
    fn choose_move(&mut self, model: &dyn ReadOnlyModel, player: Player) -> Option<Move> {
        self.strategy.choose_moves(model, player).into_iter().next()
    }
}

impl Agent for Box<dyn Agent> {
    fn choose_move(&mut self, model: &dyn ReadOnlyModel, player: Player) -> Option<Move> {
        self.as_mut().choose_move(model, player)
    }

    fn on_rejected(&mut self, mv: Move, err: &PlacementError) {
        self.as_mut().on_rejected(mv, err);
    }

    fn is_interactive(&self) -> bool {
        self.as_ref().is_interactive()
    }
}

/// Outcome of `MatchRunner::run`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Turns played (one per `switch_player`).
    pub turns: usize,
    /// Final score of each player.
    pub scores: PlayerMap<u32>,
    /// Result of the final board.
    pub result: GameResult,
    /// False if the turn limit stopped the match first.
    pub finished: bool,
}

/// Drives a configured `SanguineModel` to completion.
#[derive(Clone, Debug)]
pub struct MatchRunner {
    max_turns: usize,
    max_attempts: usize,
}

impl Default for MatchRunner {
    fn default() -> Self {
        Self {
            max_turns: 1000,
            max_attempts: 3,
        }
    }
}

impl MatchRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the turn limit.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    #[must_use]
    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// Set how many rejected moves a non-interactive agent gets per turn
    /// before it passes. Clamped to at least 1.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Play until the game is over or the turn limit is reached.
    ///
    /// `model` must already be configured.
    pub fn run(&self, model: &mut SanguineModel, red: &mut dyn Agent, blue: &mut dyn Agent) -> MatchSummary {
        self.run_with(model, red, blue, |_| {})
    }

    /// Like `run`, calling `after_turn` once each turn has been switched.
    pub fn run_with(
        &self,
        model: &mut SanguineModel,
        red: &mut dyn Agent,
        blue: &mut dyn Agent,
        mut after_turn: impl FnMut(&SanguineModel),
    ) -> MatchSummary {
        model.start_game();

        let mut turns = 0;
        let mut finished = model.is_game_over();
        while !finished && turns < self.max_turns {
            let player = model.current_player();
            let agent: &mut dyn Agent = match player {
                Player::Red => &mut *red,
                Player::Blue => &mut *blue,
            };
            self.play_turn(model, player, agent);
            model.switch_player();
            turns += 1;
            after_turn(model);
            finished = model.is_game_over();
        }

        if finished {
            model.end_game();
        } else {
            log::warn!("match stopped after {} turns without finishing", turns);
        }

        MatchSummary {
            turns,
            scores: PlayerMap::new(|p| model.score(p)),
            result: model.result(),
            finished,
        }
    }

    fn play_turn(&self, model: &mut SanguineModel, player: Player, agent: &mut dyn Agent) {
        if let Err(err) = model.draw_card() {
            log::debug!("{}, no draw", err);
        }

        let mut rejected = 0;
        while let Some(mv) = agent.choose_move(model, player) {
            let Err(err) = model.place_card(mv.hand_index, mv.row, mv.col) else {
                return;
            };
            log::info!("{} tried {}: {}", player, mv, err);
            agent.on_rejected(mv, &err);
            rejected += 1;
            if !agent.is_interactive() && rejected >= self.max_attempts {
                log::warn!("{} had {} moves rejected; passing", player, rejected);
                return;
            }
        }
        log::debug!("{} passes", player);
    }
}
