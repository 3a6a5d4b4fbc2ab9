//! Dice rolls and the randomness sources behind them.
//!
//! The rules engine only ever sees a roll total. This module produces those
//! totals, keeping the individual faces around for whoever draws the dice.

pub mod roll;
pub mod source;

pub use roll::DiceRoll;
pub use source::{produce_roll_total, FixedRolls, RollSource};
