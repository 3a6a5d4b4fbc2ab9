//! # dice-race
//!
//! Turn and scoring engine for a race-to-target dice game: players take turns
//! rolling dice, each roll total is added to the roller's score, and the first
//! player to reach the target score wins.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: No global game. A `GameState` is an owned value
//!    passed into the engine and handed back after every call.
//!
//! 2. **Injected Randomness**: Dice come from a `RollSource`. Live play uses
//!    a seeded `GameRng`; tests script the faces with `FixedRolls`.
//!
//! 3. **No Clock**: Rolling is split into request and resolve. Whatever sits
//!    between them (an animation, a timer) belongs to the caller.
//!
//! 4. **N-Player**: Nothing assumes two players. Any count from 1 works.
//!
//! ## Modules
//!
//! - `core`: Players, state, configuration, RNG, errors
//! - `dice`: Dice rolls and randomness sources
//! - `rules`: `TurnEngine` and turn outcomes
//! - `session`: `DiceGame` and observer notifications for a UI

pub mod core;
pub mod dice;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    DiceConfig, EngineResult, GameConfig, GameError, GameRng, GameRngState, GameState, Player, PlayerId,
};

pub use crate::dice::{produce_roll_total, DiceRoll, FixedRolls, RollSource};

pub use crate::rules::{RejectReason, Transition, TurnEngine, TurnOutcome};

pub use crate::session::{DiceGame, EventLog, GameEvent, GameObserver};
