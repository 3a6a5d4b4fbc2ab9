//! A live game: one state, one dice source, one observer.
//!
//! `DiceGame` is what a UI drives. It holds the single current `GameState`,
//! rolls real dice through its `RollSource`, and reports every change to its
//! `GameObserver`. Timing between `request_roll` and `complete_roll` is up to
//! the caller (an animation, a timer, or nothing at all).

use log::debug;

use crate::core::{EngineResult, GameConfig, GameRng, GameState};
use crate::dice::{DiceRoll, RollSource};
use crate::rules::{RejectReason, Transition, TurnEngine, TurnOutcome};

use super::observer::GameObserver;

/// One game session.
pub struct DiceGame<R, O> {
    engine: TurnEngine,
    source: R,
    observer: O,
    state: Option<GameState>,
    pending: Option<DiceRoll>,
}

impl DiceGame<GameRng, ()> {
    /// Session with default rules, entropy-seeded dice and no observer.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            engine: TurnEngine::default(),
            source: GameRng::from_entropy(),
            observer: (),
            state: None,
            pending: None,
        }
    }
}

impl<R: RollSource, O: GameObserver> DiceGame<R, O> {
    /// Create a session. No game is running until `start_game`.
    pub fn new(config: GameConfig, source: R, observer: O) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            engine: TurnEngine::new(config),
            source,
            observer,
            state: None,
            pending: None,
        })
    }

    /// The rules in use.
    #[must_use]
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    /// The current game, if one was started.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Dice of the roll in flight, if any.
    #[must_use]
    pub fn pending_roll(&self) -> Option<&DiceRoll> {
        self.pending.as_ref()
    }

    /// Get the observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Get the observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Take the session apart.
    pub fn into_parts(self) -> (R, O, Option<GameState>) {
        (self.source, self.observer, self.state)
    }

    /// Discard any current game and start a new one.
    ///
    /// On error the previous game, if any, is left as it was.
    pub fn start_game(&mut self, player_count: usize) -> EngineResult<&GameState> {
        let state = self.engine.start_game(player_count)?;
        self.pending = None;
        self.observer.on_state_initialized(&state);
        Ok(self.state.insert(state))
    }

    /// The current player asks to roll.
    ///
    /// Draws the dice immediately so they can be shown, but leaves the score
    /// alone until `complete_roll`.
    pub fn request_roll(&mut self) -> TurnOutcome {
        let Some(state) = self.state.take() else {
            return TurnOutcome::Rejected(RejectReason::NoGame);
        };

        let (state, outcome) = self.engine.request_roll(state).into_parts();
        if let TurnOutcome::Rolling { player } = &outcome {
            let roll = self.source.roll(self.engine.dice());
            debug!("{} threw {}", player.name, roll);
            self.observer.on_roll_started(player, &roll);
            self.pending = Some(roll);
        }

        self.state = Some(state);
        outcome
    }

    /// Apply the pending roll.
    pub fn complete_roll(&mut self) -> TurnOutcome {
        let Some(state) = self.state.take() else {
            return TurnOutcome::Rejected(RejectReason::NoGame);
        };
        let Some(roll) = self.pending.take() else {
            self.state = Some(state);
            return TurnOutcome::Rejected(RejectReason::NoRollPending);
        };

        let total = roll.total();
        let Transition { state, outcome } = self.engine.resolve_roll(state, total);

        match &outcome {
            TurnOutcome::NextTurn { player } => {
                self.observer.on_roll_resolved(total, &state);
                self.observer.on_turn_advanced(player);
            }
            TurnOutcome::GameOver { winner } => {
                self.observer.on_roll_resolved(total, &state);
                self.observer.on_game_over(winner);
            }
            TurnOutcome::Rejected(_) | TurnOutcome::Rolling { .. } => {}
        }

        self.state = Some(state);
        outcome
    }

    /// Request and immediately complete a roll.
    pub fn roll(&mut self) -> TurnOutcome {
        match self.request_roll() {
            TurnOutcome::Rolling { .. } => self.complete_roll(),
            rejected => rejected,
        }
    }

    /// Return to setup. Scores stay readable until the next `start_game`.
    ///
    /// Any pending roll is discarded and never applied.
    pub fn reset(&mut self) {
        self.pending = None;
        if let Some(state) = self.state.as_mut() {
            self.engine.reset_to_setup(state);
        }
    }
}
