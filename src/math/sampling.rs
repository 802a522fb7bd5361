//! Randomness sources and noise sampling.
//!
//! The scheme consumes two kinds of randomness: uniform big integers below
//! a modulus (secret keys, public-key samples, encryption randomness) and
//! small signed error terms for key generation. Uniform draws go through
//! the [`RandomSource`] trait so callers pick the generator; cryptographic
//! use requires a CSPRNG such as [`ChaCha20Rng`].

use num_bigint::{BigUint, RandBigInt};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Source of uniform big integers below a caller-supplied bound.
///
/// Implemented for every [`rand::RngCore`], so `ChaCha20Rng` and
/// `thread_rng()` both qualify. The scheme makes no quality guarantee
/// beyond what the chosen generator provides.
pub trait RandomSource {
    /// Returns a value uniform in `[0, bound)`.
    fn next_below(&mut self, bound: &BigUint) -> BigUint;
}

impl<R: RngCore> RandomSource for R {
    fn next_below(&mut self, bound: &BigUint) -> BigUint {
        self.gen_biguint_below(bound)
    }
}

/// Sampler for key-generation error terms, uniform on `[-bound, bound]`.
#[derive(Clone)]
pub struct NoiseSampler {
    bound: i64,
    rng: ChaCha20Rng,
}

impl NoiseSampler {
    /// Creates a sampler with the given bound, seeded from the OS.
    pub fn new(bound: u64) -> Self {
        Self {
            bound: bound as i64,
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Creates a seeded sampler for reproducible runs.
    pub fn with_seed(bound: u64, seed: u64) -> Self {
        Self {
            bound: bound as i64,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Samples one error term, uniform in `[-bound, bound]`.
    pub fn sample(&mut self) -> i64 {
        self.rng.gen_range(-self.bound..=self.bound)
    }

    /// Samples a vector of error terms.
    pub fn sample_vec(&mut self, len: usize) -> Vec<i64> {
        (0..len).map(|_| self.sample()).collect()
    }

    /// The configured bound.
    pub fn bound(&self) -> u64 {
        self.bound as u64
    }
}

impl std::fmt::Debug for NoiseSampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseSampler")
            .field("bound", &self.bound)
            .finish()
    }
}
