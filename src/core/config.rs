//! Game configuration types.
//!
//! Hosts configure the engine at startup by providing:
//! - `DiceConfig`: how many dice are rolled and how many faces each has
//! - `GameConfig`: target score plus dice configuration
//!
//! Both are plain data with serde derives, so they can be loaded from JSON.
//! The player count is chosen per game and passed to `start_game`.

use serde::{Deserialize, Serialize};

use super::error::{EngineResult, GameError};

/// Score a player must reach to win, unless configured otherwise.
pub const DEFAULT_TARGET_SCORE: u64 = 50;

/// Faces per die for a standard six-sided die.
pub const DEFAULT_FACE_COUNT: u32 = 6;

/// Dice rolled per turn.
pub const DEFAULT_DICE_COUNT: u32 = 2;

/// Dice rolled on each turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiceConfig {
    /// Faces per die. Each die yields a value in `1..=face_count`.
    pub face_count: u32,

    /// Number of dice summed into one roll total.
    pub dice_count: u32,
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self {
            face_count: DEFAULT_FACE_COUNT,
            dice_count: DEFAULT_DICE_COUNT,
        }
    }
}

impl DiceConfig {
    /// Create a dice configuration.
    #[must_use]
    pub const fn new(face_count: u32, dice_count: u32) -> Self {
        Self {
            face_count,
            dice_count,
        }
    }

    /// Smallest possible roll total.
    #[must_use]
    pub const fn min_total(&self) -> u64 {
        self.dice_count as u64
    }

    /// Largest possible roll total.
    #[must_use]
    pub const fn max_total(&self) -> u64 {
        self.dice_count as u64 * self.face_count as u64
    }

    /// Check that both counts are positive.
    pub fn validate(&self) -> EngineResult<()> {
        if self.face_count == 0 {
            return Err(GameError::invalid("dice need at least 1 face"));
        }
        if self.dice_count == 0 {
            return Err(GameError::invalid("need at least 1 die per roll"));
        }
        Ok(())
    }
}

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Score at or above which the roller wins.
    pub target_score: u64,

    /// Dice rolled each turn.
    pub dice: DiceConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            dice: DiceConfig::default(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration (target 50, two six-sided dice).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target score.
    #[must_use]
    pub fn with_target_score(mut self, target_score: u64) -> Self {
        self.target_score = target_score;
        self
    }

    /// Set the dice configuration.
    #[must_use]
    pub fn with_dice(mut self, dice: DiceConfig) -> Self {
        self.dice = dice;
        self
    }

    /// Check every parameter.
    pub fn validate(&self) -> EngineResult<()> {
        validate_target_score(self.target_score)?;
        self.dice.validate()
    }
}

pub(crate) fn validate_target_score(target_score: u64) -> EngineResult<()> {
    if target_score == 0 {
        return Err(GameError::invalid("target score must be positive"));
    }
    Ok(())
}

pub(crate) fn validate_player_count(player_count: usize) -> EngineResult<()> {
    if player_count == 0 {
        return Err(GameError::invalid("need at least 1 player"));
    }
    if u32::try_from(player_count).is_err() {
        return Err(GameError::invalid(format!("too many players: {player_count}")));
    }
    Ok(())
}
