//! Die-face random sources.
//!
//! ## Key Features
//!
//! - **Deterministic**: `Die::new(seed)` produces an identical face sequence for the same seed
//! - **Seeded once**: a die is seeded at construction and never reseeded mid-session
//! - **Swappable**: the engine rolls through the `DiceSource` trait, so tests can
//!   script exact faces with `ScriptedDice`
//!
//! ```
//! use rust_pig::core::{DiceSource, Die};
//!
//! let mut a = Die::new(0);
//! let mut b = Die::new(0);
//! for _ in 0..20 {
//!     let face = a.roll().unwrap();
//!     assert!((1..=6).contains(&face));
//!     assert_eq!(face, b.roll().unwrap());
//! }
//! ```

use std::collections::VecDeque;

use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::error::PigError;

/// Lowest face of the die.
pub const MIN_FACE: u8 = 1;

/// Highest face of the die.
pub const MAX_FACE: u8 = 6;

/// Seed used by test configurations.
pub const TEST_SEED: u64 = 0;

/// Source of die faces in `MIN_FACE..=MAX_FACE`.
pub trait DiceSource {
    /// Roll once. Errors are fatal to the session.
    fn roll(&mut self) -> Result<u8, PigError>;
}

impl<D: DiceSource + ?Sized> DiceSource for Box<D> {
    fn roll(&mut self) -> Result<u8, PigError> {
        (**self).roll()
    }
}

/// Six-sided die backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct Die {
    inner: ChaCha8Rng,
    seed: u64,
}

impl Die {
    /// Create a die with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a die seeded from the operating system.
    ///
    /// The drawn seed is kept so the session can be replayed with `Die::new`.
    pub fn from_entropy() -> Result<Self, PigError> {
        let mut bytes = [0u8; 8];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| PigError::random_source(e.to_string()))?;
        Ok(Self::new(u64::from_le_bytes(bytes)))
    }

    /// Seeded die when `seed` is given, OS entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Result<Self, PigError> {
        match seed {
            Some(seed) => Ok(Self::new(seed)),
            None => Self::from_entropy(),
        }
    }

    /// The seed this die was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DiceSource for Die {
    fn roll(&mut self) -> Result<u8, PigError> {
        Ok(self.inner.gen_range(MIN_FACE..=MAX_FACE))
    }
}

/// Replays a fixed sequence of faces.
///
/// Rolling past the end of the script is a `RandomSource` error.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    faces: VecDeque<u8>,
}

impl ScriptedDice {
    /// Create from a face sequence.
    ///
    /// Panics if a face lies outside `MIN_FACE..=MAX_FACE`.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        let faces: VecDeque<u8> = faces.into_iter().collect();
        assert!(
            faces.iter().all(|f| (MIN_FACE..=MAX_FACE).contains(f)),
            "Scripted faces must be in 1..=6"
        );
        Self { faces }
    }

    /// Faces not yet rolled.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> Result<u8, PigError> {
        self.faces
            .pop_front()
            .ok_or_else(|| PigError::random_source("scripted dice exhausted"))
    }
}
