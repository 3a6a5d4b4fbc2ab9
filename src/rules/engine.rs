//! Turn sequencing, score accumulation and win detection.
//!
//! `TurnEngine` holds only configuration. Every operation takes the game
//! state explicitly and returns the next one:
//!
//! ```
//! use dice_race::core::GameConfig;
//! use dice_race::rules::{TurnEngine, TurnOutcome};
//!
//! let engine = TurnEngine::new(GameConfig::default());
//! let state = engine.start_game(2).unwrap();
//!
//! let step = engine.roll_turn(state, 12);
//! assert!(matches!(step.outcome, TurnOutcome::NextTurn { .. }));
//! assert_eq!(step.state.scores(), vec![12, 0]);
//! ```
//!
//! ## Rolling in two steps
//!
//! A UI that animates the dice calls `request_roll` when the player clicks,
//! and `resolve_roll` once the animation is done. While a roll is pending,
//! further requests are rejected. The engine keeps no clock of its own.

use log::{debug, info};

use crate::core::config::{validate_player_count, validate_target_score};
use crate::core::{DiceConfig, EngineResult, GameConfig, GameState, Player};
use crate::dice::{produce_roll_total, RollSource};

use super::outcome::{RejectReason, Transition, TurnOutcome};

/// Rules for a race-to-target dice game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnEngine {
    config: GameConfig,
}

impl TurnEngine {
    /// Create an engine. The configuration is checked when a game starts.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Get the game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Dice rolled each turn.
    #[must_use]
    pub fn dice(&self) -> &DiceConfig {
        &self.config.dice
    }

    /// Start a new game with `player_count` players named "Player 1", "Player 2", ...
    ///
    /// Fails with `InvalidConfiguration` if there are no players or the
    /// target score is zero.
    pub fn start_game(&self, player_count: usize) -> EngineResult<GameState> {
        validate_player_count(player_count)?;
        validate_target_score(self.config.target_score)?;

        info!(
            "Starting game: {} players, target {}",
            player_count, self.config.target_score
        );
        Ok(GameState::new(player_count, self.config.target_score))
    }

    /// Apply a roll total to the current player in one step.
    ///
    /// Rejected if the game is inactive or a two-step roll is pending.
    #[must_use]
    pub fn roll_turn(&self, state: GameState, total: u64) -> Transition {
        if !state.is_active() {
            return reject(state, RejectReason::Inactive);
        }
        if state.is_rolling() {
            return reject(state, RejectReason::RollPending);
        }
        self.apply_total(state, total)
    }

    /// Mark a roll as in flight for the current player.
    #[must_use]
    pub fn request_roll(&self, mut state: GameState) -> Transition {
        if !state.is_active() {
            return reject(state, RejectReason::Inactive);
        }
        if state.is_rolling() {
            return reject(state, RejectReason::RollPending);
        }

        state.set_rolling(true);
        let player = state.current_player().clone();
        debug!("{} is rolling", player.name);

        Transition {
            state,
            outcome: TurnOutcome::Rolling { player },
        }
    }

    /// Apply the total of the pending roll.
    #[must_use]
    pub fn resolve_roll(&self, mut state: GameState, total: u64) -> Transition {
        if !state.is_active() {
            return reject(state, RejectReason::Inactive);
        }
        if !state.is_rolling() {
            return reject(state, RejectReason::NoRollPending);
        }

        state.set_rolling(false);
        self.apply_total(state, total)
    }

    /// Draw a roll total from `source` using this engine's dice.
    pub fn produce_roll_total<R: RollSource + ?Sized>(&self, source: &mut R) -> u64 {
        produce_roll_total(source, self.config.dice.face_count, self.config.dice.dice_count)
    }

    /// Stop the game without touching scores.
    ///
    /// A roll still pending is dropped: the state is no longer active, so a
    /// later `resolve_roll` is rejected instead of applying a stale total.
    /// This differs from a fire-and-forget timer, which would still credit
    /// the roll after the reset.
    pub fn reset_to_setup(&self, state: &mut GameState) {
        debug!("Game reset to setup after {} rolls", state.rolls_applied());
        state.deactivate();
    }

    /// The winner, if the game has ended by reaching the target.
    #[must_use]
    pub fn is_terminal(&self, state: &GameState) -> Option<Player> {
        state.winner().cloned()
    }

    fn apply_total(&self, mut state: GameState, total: u64) -> Transition {
        let score = state.credit_current(total);
        let roller = state.current_player().clone();
        debug!("{} rolled {} (score {})", roller.name, total, score);

        if score >= state.target_score() {
            state.deactivate();
            info!("{} wins with {}", roller.name, score);
            return Transition {
                state,
                outcome: TurnOutcome::GameOver { winner: roller },
            };
        }

        state.advance_turn();
        let player = state.current_player().clone();
        Transition {
            state,
            outcome: TurnOutcome::NextTurn { player },
        }
    }
}

fn reject(state: GameState, reason: RejectReason) -> Transition {
    debug!("Roll rejected: {}", reason);
    Transition::rejected(state, reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DiceConfig, GameError, PlayerId};
    use crate::dice::FixedRolls;

    fn engine() -> TurnEngine {
        TurnEngine::new(GameConfig::default())
    }

    #[test]
    fn test_start_game() {
        let state = engine().start_game(3).unwrap();

        assert_eq!(state.player_count(), 3);
        let names: Vec<_> = state.players().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Player 1", "Player 2", "Player 3"]);
        let ids: Vec<_> = state.players().map(|p| p.id).collect();
        assert_eq!(ids, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);
        assert_eq!(state.current_player_index(), 0);
        assert_eq!(state.target_score(), 50);
        assert!(state.is_active());
    }

    #[test]
    fn test_start_game_zero_players() {
        let err = engine().start_game(0).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_start_game_zero_target() {
        let engine = TurnEngine::new(GameConfig::new().with_target_score(0));
        assert!(engine.start_game(2).is_err());
    }

    #[test]
    fn test_roll_turn_advances() {
        let engine = engine();
        let state = engine.start_game(2).unwrap();

        let (state, outcome) = engine.roll_turn(state, 12).into_parts();
        assert_eq!(outcome, TurnOutcome::NextTurn { player: Player::new(PlayerId::new(2)) });
        assert_eq!(state.scores(), vec![12, 0]);
        assert_eq!(state.current_player_index(), 1);
        assert_eq!(state.last_total(), Some(12));
    }

    #[test]
    fn test_roll_turn_wins_at_exact_target() {
        let engine = TurnEngine::new(GameConfig::new().with_target_score(10));
        let state = engine.start_game(2).unwrap();

        let step = engine.roll_turn(state, 10);
        assert!(step.outcome.is_winner(PlayerId::new(1)));
        assert!(!step.state.is_active());
        assert_eq!(step.state.current_player_index(), 0);
        assert_eq!(engine.is_terminal(&step.state).map(|p| p.id), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_roll_turn_rejected_after_game_over() {
        let engine = TurnEngine::new(GameConfig::new().with_target_score(5));
        let state = engine.start_game(2).unwrap();
        let state = engine.roll_turn(state, 6).state;

        let before = state.clone();
        let step = engine.roll_turn(state, 4);
        assert_eq!(step.outcome, TurnOutcome::Rejected(RejectReason::Inactive));
        assert_eq!(step.state, before);
    }

    #[test]
    fn test_roll_turn_rejected_while_pending() {
        let engine = engine();
        let state = engine.start_game(2).unwrap();
        let state = engine.request_roll(state).state;

        let step = engine.roll_turn(state, 7);
        assert_eq!(step.outcome, TurnOutcome::Rejected(RejectReason::RollPending));
        assert_eq!(step.state.scores(), vec![0, 0]);
    }

    #[test]
    fn test_request_then_resolve() {
        let engine = engine();
        let state = engine.start_game(2).unwrap();

        let step = engine.request_roll(state);
        assert_eq!(step.outcome, TurnOutcome::Rolling { player: Player::new(PlayerId::new(1)) });
        assert!(step.state.is_rolling());

        let again = engine.request_roll(step.state);
        assert_eq!(again.outcome, TurnOutcome::Rejected(RejectReason::RollPending));

        let step = engine.resolve_roll(again.state, 9);
        assert!(matches!(step.outcome, TurnOutcome::NextTurn { .. }));
        assert!(!step.state.is_rolling());
        assert_eq!(step.state.scores(), vec![9, 0]);
    }

    #[test]
    fn test_resolve_without_request() {
        let engine = engine();
        let state = engine.start_game(2).unwrap();

        let step = engine.resolve_roll(state, 9);
        assert_eq!(step.outcome, TurnOutcome::Rejected(RejectReason::NoRollPending));
        assert_eq!(step.state.scores(), vec![0, 0]);
    }

    #[test]
    fn test_reset_to_setup() {
        let engine = engine();
        let state = engine.start_game(2).unwrap();
        let mut state = engine.roll_turn(state, 8).state;

        engine.reset_to_setup(&mut state);
        assert!(!state.is_active());
        assert_eq!(state.scores(), vec![8, 0]);
        assert!(engine.is_terminal(&state).is_none());

        let step = engine.request_roll(state);
        assert_eq!(step.outcome, TurnOutcome::Rejected(RejectReason::Inactive));
    }

    #[test]
    fn test_reset_clears_pending_roll() {
        let engine = engine();
        let state = engine.start_game(2).unwrap();
        let mut state = engine.request_roll(state).state;

        engine.reset_to_setup(&mut state);

        let step = engine.resolve_roll(state, 5);
        assert_eq!(step.outcome, TurnOutcome::Rejected(RejectReason::Inactive));
    }

    #[test]
    fn test_produce_roll_total_uses_config() {
        let engine = TurnEngine::new(GameConfig::new().with_dice(DiceConfig::new(6, 3)));
        let mut source = FixedRolls::new([1, 2, 3]);
        assert_eq!(engine.produce_roll_total(&mut source), 6);
    }
}
