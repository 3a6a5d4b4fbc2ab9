//! Player identification and per-player records.
//!
//! ## PlayerId
//!
//! Stable 1-based identifier assigned at game start. `PlayerId::new(1)` is
//! the first player in turn order.
//!
//! ## Player
//!
//! Name and score accumulator. Scores only ever grow, by applying roll totals.

use serde::{Deserialize, Serialize};

/// 1-based player identifier.
///
/// The turn-order index of a player is `id - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the 0-based turn-order index.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use dice_race::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u32).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identifier, 1-based.
    pub id: PlayerId,

    /// Display name ("Player 1", "Player 2", ...).
    pub name: String,

    /// Accumulated score.
    pub score: u64,
}

impl Player {
    /// Create a player with the default name for its ID and a zero score.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            name: id.to_string(),
            score: 0,
        }
    }

    /// Add a roll total to the score. Saturates instead of wrapping.
    pub fn add_score(&mut self, total: u64) -> u64 {
        self.score = self.score.saturating_add(total);
        self.score
    }

    /// Whether this player has reached `target`.
    #[must_use]
    pub fn has_reached(&self, target: u64) -> bool {
        self.score >= target
    }
}
