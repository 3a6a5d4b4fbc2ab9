//! Notifications from a running game to whoever draws it.
//!
//! Every notification carries enough data to redraw without reaching back
//! into the session.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Player};
use crate::dice::DiceRoll;

/// Receives game notifications. All methods default to doing nothing.
pub trait GameObserver {
    /// A new game was started.
    fn on_state_initialized(&mut self, _state: &GameState) {}

    /// A roll was accepted and its dice are known. The total is applied later.
    fn on_roll_started(&mut self, _player: &Player, _roll: &DiceRoll) {}

    /// A roll total was applied.
    fn on_roll_resolved(&mut self, _total: u64, _state: &GameState) {}

    /// The turn passed to `player`.
    fn on_turn_advanced(&mut self, _player: &Player) {}

    /// `winner` reached the target score.
    fn on_game_over(&mut self, _winner: &Player) {}
}

/// Observer that ignores everything.
impl GameObserver for () {}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn on_state_initialized(&mut self, state: &GameState) {
        (**self).on_state_initialized(state);
    }

    fn on_roll_started(&mut self, player: &Player, roll: &DiceRoll) {
        (**self).on_roll_started(player, roll);
    }

    fn on_roll_resolved(&mut self, total: u64, state: &GameState) {
        (**self).on_roll_resolved(total, state);
    }

    fn on_turn_advanced(&mut self, player: &Player) {
        (**self).on_turn_advanced(player);
    }

    fn on_game_over(&mut self, winner: &Player) {
        (**self).on_game_over(winner);
    }
}

/// A recorded notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    StateInitialized(GameState),
    RollStarted { player: Player, roll: DiceRoll },
    RollResolved { total: u64, state: GameState },
    TurnAdvanced(Player),
    GameOver(Player),
}

/// Observer that keeps every notification in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Remove and return all recorded events.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl GameObserver for EventLog {
    fn on_state_initialized(&mut self, state: &GameState) {
        self.events.push(GameEvent::StateInitialized(state.clone()));
    }

    fn on_roll_started(&mut self, player: &Player, roll: &DiceRoll) {
        self.events.push(GameEvent::RollStarted {
            player: player.clone(),
            roll: roll.clone(),
        });
    }

    fn on_roll_resolved(&mut self, total: u64, state: &GameState) {
        self.events.push(GameEvent::RollResolved {
            total,
            state: state.clone(),
        });
    }

    fn on_turn_advanced(&mut self, player: &Player) {
        self.events.push(GameEvent::TurnAdvanced(player.clone()));
    }

    fn on_game_over(&mut self, winner: &Player) {
        self.events.push(GameEvent::GameOver(winner.clone()));
    }
}
