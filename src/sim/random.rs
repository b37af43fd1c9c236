//! Seeded uniform sampling for spawn logic

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform float sampler over half-open ranges
#[derive(Debug, Clone)]
pub struct RandomRange {
    rng: Pcg32,
}

impl RandomRange {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Sample uniformly from `[min, max)`.
    ///
    /// Never panics: when `max <= min` the result lies between the two bounds.
    #[inline]
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        let u: f32 = self.rng.random();
        min + (max - min) * u
    }

    /// Pick one entry uniformly. `items` must not be empty.
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.random_range(0..items.len())]
    }
}
