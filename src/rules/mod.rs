//! Turn rules for the dice race.
//!
//! `TurnEngine` decides:
//! - Whose turn it is
//! - How a roll total changes the scores
//! - When the game is over
//!
//! Callers own the `GameState`; the engine only transforms it.

pub mod engine;
pub mod outcome;

pub use engine::TurnEngine;
pub use outcome::{RejectReason, Transition, TurnOutcome};
