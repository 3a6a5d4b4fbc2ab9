//! The result of rolling a set of dice.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Face values from one roll, in die order.
///
/// SmallVec keeps the usual two dice inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    /// Face shown by each die.
    pub faces: SmallVec<[u32; 2]>,
}

impl DiceRoll {
    /// Create a roll from face values.
    #[must_use]
    pub fn from_faces(faces: &[u32]) -> Self {
        Self {
            faces: SmallVec::from_slice(faces),
        }
    }

    /// Sum of all faces. This is what gets added to the roller's score.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.faces.iter().map(|&f| u64::from(f)).sum()
    }

    /// Number of dice in this roll.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Whether no dice were rolled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

impl FromIterator<u32> for DiceRoll {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            faces: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self.faces.iter().map(u32::to_string).collect();
        write!(f, "{} = {}", faces.join(" + "), self.total())
    }
}
