//! DeterministicRng - Seeded randomness
//!
//! TigerStyle: Same seed, same sequence. Seeds are logged.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::constants::ENV_DST_SEED;

/// A seeded random number generator for simulation.
#[derive(Debug, Clone)]
pub struct DeterministicRng {
    seed: u64,
    rng: ChaCha8Rng,
}

impl DeterministicRng {
    /// Create a generator from an explicit seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Use `DST_SEED` if set, otherwise `default_seed`.
    ///
    /// The chosen seed is logged so failing runs can be replayed.
    #[must_use]
    pub fn from_env_or(default_seed: u64) -> Self {
        let seed = match std::env::var(ENV_DST_SEED) {
            Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "ignoring malformed {}", ENV_DST_SEED);
                default_seed
            }),
            Err(_) => default_seed,
        };

        tracing::info!(seed, "DST seed (replay with {}={})", ENV_DST_SEED, seed);
        Self::new(seed)
    }

    /// Seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Return `true` with the given probability.
    ///
    /// # Panics
    /// Panics if `probability` is outside `0.0..=1.0`.
    pub fn next_bool(&mut self, probability: f64) -> bool {
        assert!(
            (0.0..=1.0).contains(&probability),
            "probability {} must be within 0.0..=1.0",
            probability
        );
        self.rng.gen_bool(probability)
    }

    /// Next raw value.
    pub fn next_u64(&mut self) -> u64 {
        self.rng.gen()
    }
}
