//! Game state: players, turn pointer, target and activity flags.
//!
//! A `GameState` is an owned value. Engine operations take it by value and
//! hand back the next state, so callers always hold exactly the state they
//! last received.
//!
//! Uses `im` persistent vectors so that keeping earlier snapshots around
//! (undo, replay, rendering the previous frame) costs O(1) per clone.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::{Player, PlayerId};

/// State of one game.
///
/// Deserialization checks the same invariants `start_game` establishes: at
/// least one player, IDs `1..=n` in turn order, the turn pointer in range and
/// a positive target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr")]
pub struct GameState {
    /// Players in turn order. Fixed for the lifetime of the game.
    players: Vector<Player>,

    /// Index into `players` of the player whose turn it is.
    current_player_index: usize,

    /// Score at or above which the roller wins.
    target_score: u64,

    /// Whether rolls are accepted.
    active: bool,

    /// A roll has been requested and its total not yet applied.
    rolling: bool,

    /// Total of the most recently applied roll.
    last_total: Option<u64>,

    /// Number of roll totals applied this game.
    rolls_applied: u32,
}

impl GameState {
    /// Create a fresh, active state.
    ///
    /// Callers are expected to have validated `player_count >= 1` and
    /// `target_score >= 1`; `TurnEngine::start_game` does this.
    pub(crate) fn new(player_count: usize, target_score: u64) -> Self {
        let players = PlayerId::all(player_count).map(Player::new).collect();

        Self {
            players,
            current_player_index: 0,
            target_score,
            active: true,
            rolling: false,
            last_total: None,
            rolls_applied: 0,
        }
    }

    // === Players ===

    /// Players in turn order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Look up a player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index()).filter(|p| p.id == id)
    }

    /// Scores in turn order.
    #[must_use]
    pub fn scores(&self) -> Vec<u64> {
        self.players.iter().map(|p| p.score).collect()
    }

    // === Turn ===

    /// Index of the player whose turn it is.
    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /// The player whose turn it is.
    ///
    /// After a game ends this is the winner, since the turn does not advance.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// Add `total` to the current player's score and record it as the round total.
    ///
    /// Returns the player's new score.
    pub(crate) fn credit_current(&mut self, total: u64) -> u64 {
        self.last_total = Some(total);
        self.rolls_applied = self.rolls_applied.saturating_add(1);

        let index = self.current_player_index;
        self.players[index].add_score(total)
    }

    /// Pass the turn to the next player in order, wrapping around.
    pub(crate) fn advance_turn(&mut self) {
        self.current_player_index = (self.current_player_index + 1) % self.players.len();
    }

    // === Flags ===

    /// Score at or above which the roller wins.
    #[must_use]
    pub fn target_score(&self) -> u64 {
        self.target_score
    }

    /// Whether the game accepts rolls.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether a roll is in flight for the current turn.
    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.rolling
    }

    pub(crate) fn set_rolling(&mut self, rolling: bool) {
        self.rolling = rolling;
    }

    /// Stop accepting rolls. Scores are untouched.
    pub(crate) fn deactivate(&mut self) {
        self.active = false;
        self.rolling = false;
    }

    // === History ===

    /// Total of the most recently applied roll, if any.
    #[must_use]
    pub fn last_total(&self) -> Option<u64> {
        self.last_total
    }

    /// Number of roll totals applied this game.
    #[must_use]
    pub fn rolls_applied(&self) -> u32 {
        self.rolls_applied
    }

    /// The player who reached the target, if any.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.has_reached(self.target_score))
    }
}

/// Unchecked wire form of `GameState`.
#[derive(Deserialize)]
struct GameStateRepr {
    players: Vector<Player>,
    current_player_index: usize,
    target_score: u64,
    active: bool,
    rolling: bool,
    last_total: Option<u64>,
    rolls_applied: u32,
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = GameError;

    fn try_from(repr: GameStateRepr) -> Result<Self, Self::Error> {
        if repr.players.is_empty() {
            return Err(GameError::invalid("state has no players"));
        }
        if repr.current_player_index >= repr.players.len() {
            return Err(GameError::invalid(format!(
                "turn index {} out of range for {} players",
                repr.current_player_index,
                repr.players.len()
            )));
        }
        if repr.target_score == 0 {
            return Err(GameError::invalid("target score must be positive"));
        }
        for (index, player) in repr.players.iter().enumerate() {
            if player.id.index() != index || player.id.0 == 0 {
                return Err(GameError::invalid(format!(
                    "player {} out of turn order at position {}",
                    player.id, index
                )));
            }
        }

        Ok(Self {
            players: repr.players,
            current_player_index: repr.current_player_index,
            target_score: repr.target_score,
            active: repr.active,
            rolling: repr.rolling,
            last_total: repr.last_total,
            rolls_applied: repr.rolls_applied,
        })
    }
}
