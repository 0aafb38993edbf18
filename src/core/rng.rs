//! Dice randomness behind an injectable capability.
//!
//! ## Key Features
//!
//! - **Injectable**: the turn controller only sees [`RandomSource`]
//! - **Deterministic**: same seed produces the same faces
//! - **Scriptable**: [`FixedSequence`] replays chosen faces for tests
//!
//! ## Usage
//!
//! ```
//! use rust_yahtzee::core::{GameRng, RandomSource};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! // Same seed, same faces
//! for _ in 0..10 {
//!     assert_eq!(rng1.next_face(), rng2.next_face());
//! }
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::dice::DieFace;

/// Source of die faces.
///
/// `roll()` draws exactly one face per unheld die, in index order.
pub trait RandomSource {
    /// Draw a uniformly distributed face in `1..=6`.
    fn next_face(&mut self) -> DieFace;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_face(&mut self) -> DieFace {
        (**self).next_face()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_face(&mut self) -> DieFace {
        (**self).next_face()
    }
}

/// Seedable production RNG.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn next_face(&mut self) -> DieFace {
        let v: u8 = self.inner.gen_range(1..=6);
        DieFace::new(v).unwrap_or(DieFace::MIN)
    }
}

/// Replays a fixed sequence of faces, cycling when exhausted.
///
/// ```
/// use rust_yahtzee::core::{FixedSequence, RandomSource};
///
/// let mut dice = FixedSequence::from_values(&[6, 6, 1]);
/// assert_eq!(dice.next_face().value(), 6);
/// assert_eq!(dice.next_face().value(), 6);
/// assert_eq!(dice.next_face().value(), 1);
/// assert_eq!(dice.next_face().value(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct FixedSequence {
    faces: VecDeque<DieFace>,
    draws: usize,
}

impl FixedSequence {
    /// Build from validated faces, replayed in order and then repeated.
    ///
    /// # Panics
    ///
    /// Panics if `faces` is empty.
    pub fn new(faces: impl IntoIterator<Item = DieFace>) -> Self {
        let faces: VecDeque<_> = faces.into_iter().collect();
        assert!(!faces.is_empty(), "FixedSequence needs at least one face");
        Self { faces, draws: 0 }
    }

    /// Build from raw values; values outside `1..=6` are skipped.
    ///
    /// # Panics
    ///
    /// Panics if no valid value remains.
    pub fn from_values(values: &[u8]) -> Self {
        Self::new(values.iter().filter_map(|&v| DieFace::new(v)))
    }

    /// Number of faces drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for FixedSequence {
    fn next_face(&mut self) -> DieFace {
        self.draws += 1;
        match self.faces.pop_front() {
            Some(face) => {
                self.faces.push_back(face);
                face
            }
            None => DieFace::MIN,
        }
    }
}
