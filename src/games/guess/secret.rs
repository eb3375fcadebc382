//! Source of secret numbers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Draws secret numbers for new rounds.
pub trait SecretSource {
    /// Returns a uniformly distributed integer in `[0, bound]`.
    fn pick(&mut self, bound: i64) -> i64;
}

/// [`SecretSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomSecret<R = StdRng> {
    rng: R,
}

impl RandomSecret<StdRng> {
    /// Seeds the generator from the operating system.
    #[instrument]
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible source.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomSecret<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SecretSource for RandomSecret<R> {
    #[instrument(skip(self))]
    fn pick(&mut self, bound: i64) -> i64 {
        let value = self.rng.random_range(0..=bound.max(0));
        debug!("Secret drawn");
        value
    }
}
