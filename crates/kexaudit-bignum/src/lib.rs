#![forbid(unsafe_code)]
#![doc = "Probabilistic primality testing over arbitrary-precision integers for kexaudit."]

mod prime;
mod witness;

pub use num_bigint::BigUint;
pub use prime::{
    is_prime, rounds_for_bits, trial_division_precheck, PrimalityEngine, MIN_ROUNDS, SMALL_PRIMES,
};
pub use witness::WitnessRng;
