//! Injectable randomness for the quiz draw

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws over `0..len`
///
/// Not required to be cryptographically secure.
pub trait RandomSource: Send + Sync {
    /// Pick an index in `0..len`; `len` is always greater than zero
    fn pick_index(&self, len: usize) -> usize;
}

/// Thread-local generator, used in production
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Deterministic generator for reproducible runs and tests
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&self, len: usize) -> usize {
        match self.rng.lock() {
            Ok(mut rng) => rng.random_range(0..len),
            Err(poisoned) => poisoned.into_inner().random_range(0..len),
        }
    }
}
