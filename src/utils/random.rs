#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use rand::Error;
use rand::prelude::*;

/// Provides the way to get random generators.
///
/// A seeded implementation returns an identical stream from every `get_rng` call:
/// reproducibility of a whole run relies on the engine taking exactly one generator
/// per run and threading it through all stochastic decisions.
pub trait Random: Send + Sync {
    /// Returns a fresh RNG.
    fn get_rng(&self) -> RandomGen;
}

/// A default random implementation with optional seed.
pub struct DefaultRandom {
    seed: Option<u64>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` with seed.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { seed: None }
    }
}

impl Random for DefaultRandom {
    fn get_rng(&self) -> RandomGen {
        if let Some(seed) = self.seed {
            RandomGen { rng: SmallRng::seed_from_u64(seed) }
        } else {
            RandomGen { rng: SmallRng::from_rng(thread_rng()).expect("cannot get RNG") }
        }
    }
}

/// Specifies underlying random generator type.
#[derive(Clone, Debug)]
pub struct RandomGen {
    rng: SmallRng,
}

impl RngCore for RandomGen {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.rng.try_fill_bytes(dest)
    }
}

impl SeedableRng for RandomGen {
    type Seed = <SmallRng as SeedableRng>::Seed;

    fn from_seed(seed: Self::Seed) -> Self {
        Self { rng: SmallRng::from_seed(seed) }
    }
}
