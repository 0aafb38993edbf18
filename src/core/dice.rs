//! Dice faces and the per-turn roll state.
//!
//! ## DieFace
//!
//! A validated face value in `1..=6`. Deserialization rejects anything else,
//! so a decoded snapshot can never carry an impossible die.
//!
//! ## RollState
//!
//! Five dice, the parallel held mask and the remaining roll budget.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::rules::{DICE_COUNT, ROLLS_PER_TURN};

/// A single die face in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieFace(u8);

impl DieFace {
    /// Lowest face.
    pub const MIN: DieFace = DieFace(1);
    /// Highest face.
    pub const MAX: DieFace = DieFace(6);

    /// Create a face, returning `None` outside `1..=6`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 6 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Raw face value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Rejected face value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("die face {0} is outside 1..=6")]
pub struct InvalidFace(pub u8);

impl TryFrom<u8> for DieFace {
    type Error = InvalidFace;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DieFace::new(value).ok_or(InvalidFace(value))
    }
}

impl From<DieFace> for u8 {
    fn from(face: DieFace) -> u8 {
        face.0
    }
}

impl std::fmt::Display for DieFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Five dice.
pub type Dice = [DieFace; DICE_COUNT];

/// Build a dice array from raw values.
///
/// Returns `None` if any value is outside `1..=6`.
#[must_use]
pub fn dice_from_values(values: [u8; DICE_COUNT]) -> Option<Dice> {
    let mut out = [DieFace::MIN; DICE_COUNT];
    for (slot, v) in out.iter_mut().zip(values) {
        *slot = DieFace::new(v)?;
    }
    Some(out)
}

/// Dice shown between turns, before the first roll.
pub const NEUTRAL_DICE: Dice = [DieFace::MIN; DICE_COUNT];

/// Dice, held mask and roll budget for the turn in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollState {
    pub(crate) dice: Dice,
    pub(crate) held: [bool; DICE_COUNT],
    pub(crate) rolls_left: u8,
}

impl RollState {
    /// Fresh turn: neutral dice, nothing held, full roll budget.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dice: NEUTRAL_DICE,
            held: [false; DICE_COUNT],
            rolls_left: ROLLS_PER_TURN,
        }
    }

    #[must_use]
    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    #[must_use]
    pub fn held(&self) -> &[bool; DICE_COUNT] {
        &self.held
    }

    #[must_use]
    pub fn rolls_left(&self) -> u8 {
        self.rolls_left
    }

    /// True once the first roll of the turn has happened.
    #[must_use]
    pub fn has_rolled(&self) -> bool {
        self.rolls_left < ROLLS_PER_TURN
    }

    /// Indices the next roll will redraw, in index order.
    ///
    /// Presentation layers use this to animate only the dice that change.
    #[must_use]
    pub fn unheld_indices(&self) -> SmallVec<[usize; DICE_COUNT]> {
        self.held
            .iter()
            .enumerate()
            .filter(|(_, &h)| !h)
            .map(|(i, _)| i)
            .collect()
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for RollState {
    fn default() -> Self {
        Self::new()
    }
}
