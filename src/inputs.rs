//! Random sources for benchmark inputs.
//!
//! Inputs come from a deterministic source so runs are reproducible. Anything
//! random that happens afterwards (the benchmark schedule shuffle) uses a
//! separate time-seeded source instead of reseeding the first one.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::InputError;
use crate::utils::time_seed;

/// Default vector length.
pub const DEFAULT_SIZE: usize = 4096;

/// Default seed for input generation.
pub const DEFAULT_SEED: u64 = 42;

/// A seeded pseudo-random source.
pub struct InputSource {
    rng: StdRng,
    seed: u64,
}

impl InputSource {
    /// Deterministic source: the same seed always yields the same values.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Source seeded from the current time, for unrelated randomness.
    pub fn from_time() -> Self {
        Self::seeded(time_seed())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw one value uniformly from `[0, 1)`.
    pub fn next_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Generate two vectors of length `n`.
    ///
    /// Values are drawn interleaved: `x[i]` then `y[i]`, for each `i`.
    ///
    /// # Errors
    /// Returns [`InputError::Allocation`] if the vectors cannot be allocated.
    pub fn vector_pair(&mut self, n: usize) -> Result<(Vec<f32>, Vec<f32>), InputError> {
        let mut x = Vec::new();
        let mut y = Vec::new();
        x.try_reserve_exact(n)
            .and_then(|_| y.try_reserve_exact(n))
            .map_err(|_| InputError::Allocation { len: n })?;
        for _ in 0..n {
            x.push(self.next_unit());
            y.push(self.next_unit());
        }
        debug!(seed = self.seed, len = n, "generated input vectors");
        Ok((x, y))
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.rng);
    }
}
