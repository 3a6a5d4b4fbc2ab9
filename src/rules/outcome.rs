//! What a roll request did to the game.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Player, PlayerId};

/// Why a roll request was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// No game has been started.
    NoGame,
    /// The game is over or was reset to setup.
    Inactive,
    /// A roll is already in flight for this turn.
    RollPending,
    /// There is no requested roll to resolve.
    NoRollPending,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            RejectReason::NoGame => "no game in progress",
            RejectReason::Inactive => "game is not active",
            RejectReason::RollPending => "a roll is already pending",
            RejectReason::NoRollPending => "no roll is pending",
        };
        f.write_str(reason)
    }
}

/// Turn result signal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Nothing changed.
    Rejected(RejectReason),
    /// A roll was accepted and is waiting for its total.
    Rolling {
        /// The player who is rolling.
        player: Player,
    },
    /// The total was applied and the turn passed on.
    NextTurn {
        /// The new current player.
        player: Player,
    },
    /// The total pushed the roller to the target.
    GameOver {
        /// The roller, who has won.
        winner: Player,
    },
}

impl TurnOutcome {
    /// Whether the request was ignored.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, TurnOutcome::Rejected(_))
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            TurnOutcome::GameOver { winner } => winner.id == player,
            _ => false,
        }
    }

    /// The winner, if this outcome ended the game.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        match self {
            TurnOutcome::GameOver { winner } => Some(winner),
            _ => None,
        }
    }
}

/// The state after an engine call, and what happened.
///
/// On rejection `state` is exactly the state that was passed in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The next state.
    pub state: GameState,
    /// What the call did.
    pub outcome: TurnOutcome,
}

impl Transition {
    pub(crate) fn rejected(state: GameState, reason: RejectReason) -> Self {
        Self {
            state,
            outcome: TurnOutcome::Rejected(reason),
        }
    }

    /// Split into state and outcome.
    #[must_use]
    pub fn into_parts(self) -> (GameState, TurnOutcome) {
        (self.state, self.outcome)
    }
}
