//! Engine error types.
//!
//! Only configuration can fail. Roll requests that arrive at the wrong time
//! are not errors: they come back as `TurnOutcome::Rejected` and leave the
//! state untouched.

use thiserror::Error;

/// Errors raised by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A game or dice parameter is out of range. Nothing was started.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl GameError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        GameError::InvalidConfiguration(reason.into())
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, GameError>;
