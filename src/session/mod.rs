//! Session layer: the boundary a UI talks to.
//!
//! - Inbound: `DiceGame::request_roll`, then `DiceGame::complete_roll` once
//!   the dice have finished animating
//! - Outbound: `GameObserver` notifications
//!
//! `EventLog` is a ready-made observer that records every notification.

pub mod game;
pub mod observer;

pub use game::DiceGame;
pub use observer::{EventLog, GameEvent, GameObserver};
