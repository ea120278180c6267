//! Witness randomness for Miller-Rabin rounds.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

/// Source of Miller-Rabin witnesses.
///
/// `Os` draws from the operating system RNG. `Seeded` is reproducible and is
/// meant for tests and for re-running an analysis with identical witnesses.
#[derive(Debug, Clone)]
pub enum WitnessRng {
    Os(OsRng),
    Seeded(StdRng),
}

impl WitnessRng {
    pub fn os() -> Self {
        WitnessRng::Os(OsRng)
    }

    pub fn seeded(seed: u64) -> Self {
        WitnessRng::Seeded(StdRng::seed_from_u64(seed))
    }

    /// Seeded if `seed` is set, OS-backed otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::os, Self::seeded)
    }
}

impl RngCore for WitnessRng {
    fn next_u32(&mut self) -> u32 {
        match self {
            WitnessRng::Os(rng) => rng.next_u32(),
            WitnessRng::Seeded(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            WitnessRng::Os(rng) => rng.next_u64(),
            WitnessRng::Seeded(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            WitnessRng::Os(rng) => rng.fill_bytes(dest),
            WitnessRng::Seeded(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            WitnessRng::Os(rng) => rng.try_fill_bytes(dest),
            WitnessRng::Seeded(rng) => rng.try_fill_bytes(dest),
        }
    }
}
