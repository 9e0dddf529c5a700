//! Injectable randomness for topology generation.
//!
//! The generator never touches a global RNG. Everything it draws goes through
//! [`RandomSource`], so a fixed seed reproduces the whole pipeline.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Requested more distinct items than the population holds
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot sample {requested} distinct items from a population of {available}")]
pub struct SampleError {
    pub requested: usize,
    pub available: usize,
}

/// Source of the three kinds of draws the generator needs.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn uniform_float(&mut self) -> f64;

    /// Uniform integer in `[lo, hi]`, both ends inclusive.
    fn uniform_int(&mut self, lo: u32, hi: u32) -> u32;

    /// Draws `k` distinct members of `population`, in draw order.
    fn sample_without_replacement(
        &mut self,
        population: Range<usize>,
        k: usize,
    ) -> Result<Vec<usize>, SampleError>;
}

/// [`RandomSource`] backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Deterministic source: the same seed yields the same topology.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

/// Fresh seed drawn from OS entropy.
///
/// Unseeded runs draw one of these and build a [`SeededRandom`] from it, so
/// the run can be replayed with the reported seed.
pub fn entropy_seed() -> u64 {
    StdRng::from_entropy().gen()
}

impl RandomSource for SeededRandom {
    fn uniform_float(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn uniform_int(&mut self, lo: u32, hi: u32) -> u32 {
        self.rng.gen_range(lo..=hi)
    }

    fn sample_without_replacement(
        &mut self,
        population: Range<usize>,
        k: usize,
    ) -> Result<Vec<usize>, SampleError> {
        let available = population.len();
        if k > available {
            return Err(SampleError {
                requested: k,
                available,
            });
        }

        let start = population.start;
        Ok(rand::seq::index::sample(&mut self.rng, available, k)
            .into_iter()
            .map(|offset| start + offset)
            .collect())
    }
}
