//! Core types: players, state, configuration, RNG, errors.
//!
//! These are the building blocks shared by the rules engine and the session
//! layer. None of them know about turns beyond what the state records.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{DiceConfig, GameConfig, DEFAULT_DICE_COUNT, DEFAULT_FACE_COUNT, DEFAULT_TARGET_SCORE};
pub use error::{EngineResult, GameError};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
