//! Randomness sources for dice rolls.
//!
//! The engine never calls a global RNG. Anything that can produce die faces
//! implements `RollSource`:
//!
//! - `GameRng`: seeded ChaCha8, for live play
//! - `FixedRolls`: a scripted, repeating sequence of faces, for tests and replays

use std::collections::VecDeque;

use crate::core::{DiceConfig, GameRng};

use super::roll::DiceRoll;

/// A source of die faces.
pub trait RollSource {
    /// Roll a single die with `face_count` faces.
    ///
    /// Implementations should return a value in `1..=face_count`.
    fn roll_die(&mut self, face_count: u32) -> u32;

    /// Roll every die described by `dice`.
    fn roll(&mut self, dice: &DiceConfig) -> DiceRoll {
        (0..dice.dice_count)
            .map(|_| self.roll_die(dice.face_count))
            .collect()
    }
}

impl RollSource for GameRng {
    fn roll_die(&mut self, face_count: u32) -> u32 {
        GameRng::roll_die(self, face_count)
    }
}

impl<R: RollSource + ?Sized> RollSource for &mut R {
    fn roll_die(&mut self, face_count: u32) -> u32 {
        (**self).roll_die(face_count)
    }
}

/// Sum of `dice_count` independent draws over `1..=face_count`.
///
/// ```
/// use dice_race::core::GameRng;
/// use dice_race::dice::produce_roll_total;
///
/// let mut rng = GameRng::new(7);
/// let total = produce_roll_total(&mut rng, 6, 2);
/// assert!((2..=12).contains(&total));
/// ```
pub fn produce_roll_total<R: RollSource + ?Sized>(source: &mut R, face_count: u32, dice_count: u32) -> u64 {
    (0..dice_count)
        .map(|_| u64::from(source.roll_die(face_count)))
        .sum()
}

/// Scripted die faces, handed out in order and repeated once exhausted.
///
/// Faces are returned as given, even if they exceed the requested face count,
/// so tests can force any total.
#[derive(Clone, Debug)]
pub struct FixedRolls {
    faces: VecDeque<u32>,
}

impl FixedRolls {
    /// Create a source that cycles through `faces`.
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        let faces: VecDeque<u32> = faces.into_iter().collect();
        assert!(!faces.is_empty(), "FixedRolls needs at least one face");
        Self { faces }
    }

    /// Faces that will be returned next, in order.
    pub fn upcoming(&self) -> impl Iterator<Item = u32> + '_ {
        self.faces.iter().copied()
    }
}

impl RollSource for FixedRolls {
    fn roll_die(&mut self, _face_count: u32) -> u32 {
        // Non-empty by construction, so rotation always yields a face.
        self.faces.rotate_left(1);
        self.faces.back().copied().unwrap_or_default()
    }
}
