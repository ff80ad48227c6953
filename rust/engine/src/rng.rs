//! Injectable randomness for dealing, declaring and the elimination check.
//!
//! All game randomness is funnelled through [`RandomSource::roll`], so a game
//! can be replayed exactly from a seed ([`SeededRandom`]) or driven through a
//! fixed script of draws in tests ([`ScriptedRandom`]).
//!
//! ```rust
//! use liarsclub_engine::rng::{RandomSource, SeededRandom};
//!
//! let mut a = SeededRandom::new(42);
//! let mut b = SeededRandom::new(42);
//! assert_eq!(a.roll(1, 6).unwrap(), b.roll(1, 6).unwrap());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::collections::VecDeque;
use std::fmt::Debug;

use crate::errors::GameError;

pub trait RandomSource: Debug {
    /// Draw a uniform integer in `low..=high`.
    fn roll(&mut self, low: u32, high: u32) -> Result<u32, GameError>;
}

/// ChaCha20-backed source; the same seed always yields the same game.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha20Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn roll(&mut self, low: u32, high: u32) -> Result<u32, GameError> {
        if low > high {
            return Err(GameError::RandomSource(format!(
                "empty range {}..={}",
                low, high
            )));
        }
        let v = self.rng.random_range(low..=high);
        tracing::trace!(low, high, value = v, "random draw");
        Ok(v)
    }
}

/// Replays a fixed list of draws.
///
/// Once the script is used up the source either falls back to a seeded
/// generator or fails with [`GameError::RandomExhausted`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    script: VecDeque<u32>,
    fallback: Option<SeededRandom>,
}

impl ScriptedRandom {
    pub fn new<I: IntoIterator<Item = u32>>(values: I) -> Self {
        Self {
            script: values.into_iter().collect(),
            fallback: None,
        }
    }

    pub fn with_fallback<I: IntoIterator<Item = u32>>(values: I, seed: u64) -> Self {
        Self {
            script: values.into_iter().collect(),
            fallback: Some(SeededRandom::new(seed)),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn roll(&mut self, low: u32, high: u32) -> Result<u32, GameError> {
        match self.script.pop_front() {
            Some(v) if (low..=high).contains(&v) => Ok(v),
            Some(v) => Err(GameError::RandomSource(format!(
                "scripted value {} outside {}..={}",
                v, low, high
            ))),
            None => match &mut self.fallback {
                Some(rng) => rng.roll(low, high),
                None => Err(GameError::RandomExhausted),
            },
        }
    }
}
