//! Primality and safe-prime testing.
//!
//! The Miller-Rabin round count follows the bit length of the modulus under
//! test: larger candidates need fewer random witnesses for the same error
//! bound, but never fewer than the configured floor.

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, ToPrimitive, Zero};
use tracing::trace;

use crate::witness::WitnessRng;

/// Primes below 256, used for trial division.
pub const SMALL_PRIMES: [u32; 54] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Floor on Miller-Rabin rounds regardless of bit length.
pub const MIN_ROUNDS: usize = 3;

/// Miller-Rabin rounds needed to keep the error below 2^-80 for a random
/// candidate of `bits` bits.
pub fn rounds_for_bits(bits: u32) -> usize {
    if bits >= 3747 {
        3
    } else if bits >= 1345 {
        4
    } else if bits >= 476 {
        5
    } else if bits >= 400 {
        6
    } else if bits >= 347 {
        7
    } else if bits >= 308 {
        8
    } else if bits >= 55 {
        27
    } else {
        34
    }
}

/// Cheap trial-division screen of `n` and `(n-1)/2`.
///
/// Returns `(probably_prime, probably_safe_prime)`. A `false` is definitive,
/// a `true` only means no prime below 256 divides the value.
pub fn trial_division_precheck(n: &BigUint) -> (bool, bool) {
    if !passes_trial_division(n) {
        return (false, false);
    }
    let half = (n - 1u32) >> 1u32;
    (true, passes_trial_division(&half))
}

/// Test `n` for primality with the default round floor and OS witnesses.
pub fn is_prime(bit_length: u32, n: &BigUint) -> bool {
    PrimalityEngine::default().is_prime(bit_length, n)
}

fn passes_trial_division(n: &BigUint) -> bool {
    match small_prime_status(n) {
        SmallPrimeStatus::Prime => true,
        SmallPrimeStatus::Composite => false,
        SmallPrimeStatus::Unknown => true,
    }
}

enum SmallPrimeStatus {
    Prime,
    Composite,
    Unknown,
}

fn small_prime_status(n: &BigUint) -> SmallPrimeStatus {
    if n < &BigUint::from(2u32) {
        return SmallPrimeStatus::Composite;
    }
    for &p in &SMALL_PRIMES {
        if (n % p).is_zero() {
            return if *n == BigUint::from(p) {
                SmallPrimeStatus::Prime
            } else {
                SmallPrimeStatus::Composite
            };
        }
    }
    SmallPrimeStatus::Unknown
}

/// Baillie-PSW test backed by random Miller-Rabin rounds on a calibrated
/// schedule.
#[derive(Debug, Clone)]
pub struct PrimalityEngine {
    min_rounds: usize,
    rng: WitnessRng,
}

impl Default for PrimalityEngine {
    fn default() -> Self {
        Self::new(MIN_ROUNDS, WitnessRng::os())
    }
}

impl PrimalityEngine {
    /// `min_rounds` is clamped to at least [`MIN_ROUNDS`].
    pub fn new(min_rounds: usize, rng: WitnessRng) -> Self {
        Self {
            min_rounds: min_rounds.max(MIN_ROUNDS),
            rng,
        }
    }

    /// Rounds used for a candidate of `bits` bits.
    pub fn rounds(&self, bits: u32) -> usize {
        rounds_for_bits(bits).max(self.min_rounds)
    }

    /// Probabilistic primality test.
    ///
    /// `bit_length` selects the round count; it is normally the key size of
    /// the group `n` belongs to rather than `n.bits()`. The count never drops
    /// below what `n.bits()` itself calls for, so zero-padding a modulus does
    /// not buy fewer rounds.
    ///
    /// Candidates that survive trial division go through a base-2 strong
    /// probable-prime test, the random Miller-Rabin rounds, and a strong Lucas
    /// test. The base-2 and Lucas steps together make up Baillie-PSW, which
    /// holds up against composites built to fool random witnesses.
    pub fn is_prime(&mut self, bit_length: u32, n: &BigUint) -> bool {
        match small_prime_status(n) {
            SmallPrimeStatus::Prime => return true,
            SmallPrimeStatus::Composite => return false,
            SmallPrimeStatus::Unknown => {}
        }
        let bits = bit_length.min(u32::try_from(n.bits()).unwrap_or(u32::MAX));
        let rounds = self.rounds(bits);
        trace!(bit_length, bits, rounds, "miller-rabin");

        let mr = MillerRabin::new(n);
        mr.passes(&BigUint::from(2u32))
            && self.miller_rabin(&mr, rounds)
            && strong_lucas_probable_prime(n)
    }

    /// True if both `n` and `(n-1)/2` are prime. The second test only runs
    /// when the first passes.
    pub fn is_safe_prime(&mut self, bit_length: u32, n: &BigUint) -> bool {
        if !self.is_prime(bit_length, n) {
            return false;
        }
        let half = (n - 1u32) >> 1u32;
        self.is_prime(bit_length, &half)
    }

    fn miller_rabin(&mut self, mr: &MillerRabin<'_>, rounds: usize) -> bool {
        let two = BigUint::from(2u32);
        // Witness in [2, n-2]
        (0..rounds).all(|_| {
            let a = self.rng.gen_biguint_range(&two, &mr.n_minus_one);
            mr.passes(&a)
        })
    }
}

/// `n - 1 = 2^r * d` with `d` odd. Requires odd `n` > 3.
struct MillerRabin<'a> {
    n: &'a BigUint,
    n_minus_one: BigUint,
    d: BigUint,
    r: u64,
}

impl<'a> MillerRabin<'a> {
    fn new(n: &'a BigUint) -> Self {
        let n_minus_one = n - 1u32;
        let r = n_minus_one.trailing_zeros().unwrap_or(0);
        let d = &n_minus_one >> r;
        Self {
            n,
            n_minus_one,
            d,
            r,
        }
    }

    /// False if `a` witnesses that `n` is composite.
    fn passes(&self, a: &BigUint) -> bool {
        let n = self.n;
        let mut x = a.modpow(&self.d, n);
        if x.is_one() || x == self.n_minus_one {
            return true;
        }
        for _ in 1..self.r {
            x = &x * &x % n;
            if x == self.n_minus_one {
                return true;
            }
        }
        false
    }
}

/// Jacobi symbol `(a/n)` for odd `n`.
fn jacobi(a: &BigUint, n: &BigUint) -> i32 {
    let mut a = a % n;
    let mut n = n.clone();
    let mut result = 1;
    while !a.is_zero() {
        let shift = a.trailing_zeros().unwrap_or(0);
        a >>= shift;
        if shift % 2 == 1 && matches!(low_bits(&n, 8), 3 | 5) {
            result = -result;
        }
        std::mem::swap(&mut a, &mut n);
        if low_bits(&a, 4) == 3 && low_bits(&n, 4) == 3 {
            result = -result;
        }
        a = a % &n;
    }
    if n.is_one() {
        result
    } else {
        0
    }
}

fn low_bits(n: &BigUint, modulus: u32) -> u32 {
    (n % modulus).to_u32().unwrap_or(0)
}

/// `x mod n` for a signed `x`.
fn signed_mod(x: i64, n: &BigUint) -> BigUint {
    let m = BigUint::from(x.unsigned_abs()) % n;
    if x < 0 && !m.is_zero() {
        n - m
    } else {
        m
    }
}

/// `x / 2 mod n` for odd `n` and `x < n`.
fn half_mod(x: BigUint, n: &BigUint) -> BigUint {
    if x.trailing_zeros() == Some(0) {
        (x + n) >> 1u32
    } else {
        x >> 1u32
    }
}

/// Strong Lucas probable-prime test with Selfridge parameters (P = 1).
/// Requires odd `n` with no prime factor below 256.
fn strong_lucas_probable_prime(n: &BigUint) -> bool {
    // Selfridge's search never ends on a square.
    let root = n.sqrt();
    if &root * &root == *n {
        return false;
    }

    // First D in 5, -7, 9, -11, ... with (D/n) = -1
    let mut d: i64 = 5;
    loop {
        match jacobi(&signed_mod(d, n), n) {
            -1 => break,
            0 => return false,
            _ => d = if d > 0 { -(d + 2) } else { -d + 2 },
        }
    }
    let d_mod = signed_mod(d, n);
    let q_mod = signed_mod((1 - d) / 4, n);
    let two_n = n << 1u32;

    // n + 1 = 2^s * k with k odd
    let n_plus_one = n + 1u32;
    let s = n_plus_one.trailing_zeros().unwrap_or(0);
    let k = &n_plus_one >> s;

    // U_1 = 1, V_1 = P = 1
    let mut u = BigUint::one();
    let mut v = BigUint::one();
    let mut qk = q_mod.clone();
    for &bit in k.to_radix_be(2).iter().skip(1) {
        u = &u * &v % n;
        v = (&v * &v + &two_n - (&qk << 1u32)) % n;
        qk = &qk * &qk % n;
        if bit == 1 {
            let next_u = half_mod((&u + &v) % n, n);
            let next_v = half_mod((&d_mod * &u + &v) % n, n);
            u = next_u;
            v = next_v;
            qk = &qk * &q_mod % n;
        }
    }

    if u.is_zero() {
        return true;
    }
    for _ in 0..s {
        if v.is_zero() {
            return true;
        }
        v = (&v * &v + &two_n - (&qk << 1u32)) % n;
        qk = &qk * &qk % n;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bn(hex: &str) -> BigUint {
        BigUint::parse_bytes(hex.as_bytes(), 16).unwrap()
    }

    fn engine() -> PrimalityEngine {
        PrimalityEngine::new(MIN_ROUNDS, WitnessRng::seeded(0x6b65_7861))
    }

    // 512-bit safe prime: p = 2q + 1 with q prime.
    const SAFE_512: &str = "\
f5d6db2cc76405bdb529de3139f894c1ec53bbefff54c47e53756414cf671860\
d688eedd45b91073544b75205b26965690378e636bf40bece2b3b588d0953ca3";

    #[test]
    fn test_small_primes() {
        let mut e = engine();
        for &p in &SMALL_PRIMES {
            assert!(e.is_prime(8, &BigUint::from(p)), "{p} should be prime");
        }
    }

    #[test]
    fn test_small_non_primes() {
        let mut e = engine();
        for n in [0u32, 1, 4, 9, 15, 21, 255, 256, 65535] {
            assert!(!e.is_prime(16, &BigUint::from(n)), "{n} should be composite");
        }
    }

    #[test]
    fn test_carmichael_numbers() {
        let mut e = engine();
        for n in [561u64, 41041, 825265, 321197185] {
            assert!(!e.is_prime(64, &BigUint::from(n)), "{n} is composite");
        }
    }

    #[test]
    fn test_strong_pseudoprime_to_small_bases() {
        // Strong pseudoprime to bases 2..=23 with no prime factor below 256.
        let n = BigUint::from(3825123056546413051u64);
        assert!(!engine().is_prime(62, &n));
    }

    #[test]
    fn test_padded_composite_never_reported_prime() {
        // 146611 = 271 * 541 = p(2p - 1): a quarter of all bases are strong liars.
        let n = BigUint::from(146611u32);
        for seed in 0..2000 {
            for bit_length in [2048, 8192] {
                let mut e = PrimalityEngine::new(MIN_ROUNDS, WitnessRng::seeded(seed));
                assert!(!e.is_prime(bit_length, &n), "seed {seed}, {bit_length} bits");
            }
        }
    }

    #[test]
    fn test_large_factor_composite_at_large_bit_length() {
        // p(2p - 1) with p = 1099511628211, both factors prime.
        let n = BigUint::from(1099511628211u64) * BigUint::from(2199023256421u64);
        for seed in 0..200 {
            let mut e = PrimalityEngine::new(MIN_ROUNDS, WitnessRng::seeded(seed));
            assert!(!e.is_prime(8192, &n), "seed {seed}");
        }
    }

    #[test]
    fn test_strong_lucas() {
        let m61 = (BigUint::one() << 61u32) - 1u32;
        let m127 = (BigUint::one() << 127u32) - 1u32;
        assert!(strong_lucas_probable_prime(&m61));
        assert!(strong_lucas_probable_prime(&m127));
        assert!(strong_lucas_probable_prime(&bn(SAFE_512)));

        // Strong base-2 pseudoprimes are caught by the Lucas step
        for n in [1373653u64, 25326001, 3825123056546413051] {
            let n = BigUint::from(n);
            assert!(MillerRabin::new(&n).passes(&BigUint::from(2u32)), "{n}");
            assert!(!strong_lucas_probable_prime(&n), "{n}");
        }

        // and strong Lucas pseudoprimes by the base-2 step
        for n in [5459u32, 5777, 10877, 16109, 18971] {
            let n = BigUint::from(n);
            assert!(strong_lucas_probable_prime(&n), "{n}");
            assert!(!MillerRabin::new(&n).passes(&BigUint::from(2u32)), "{n}");
        }

        // 263^2
        assert!(!strong_lucas_probable_prime(&BigUint::from(69169u32)));
    }

    #[test]
    fn test_jacobi() {
        let j = |a: u32, n: u32| jacobi(&BigUint::from(a), &BigUint::from(n));
        assert_eq!(j(2, 7), 1);
        assert_eq!(j(3, 7), -1);
        assert_eq!(j(5, 21), 1);
        assert_eq!(j(6, 15), 0);
        assert_eq!(j(1001, 9907), -1);
        assert_eq!(j(19, 45), 1);
    }

    #[test]
    fn test_mersenne_primes() {
        let mut e = engine();
        let m61 = (BigUint::one() << 61u32) - 1u32;
        let m127 = (BigUint::one() << 127u32) - 1u32;
        assert!(e.is_prime(61, &m61));
        assert!(e.is_prime(127, &m127));
        // 2^128 - 1 is divisible by 3
        let m128 = (BigUint::one() << 128u32) - 1u32;
        assert!(!e.is_prime(128, &m128));
    }

    #[test]
    fn test_safe_prime() {
        let mut e = engine();
        assert!(e.is_safe_prime(8, &BigUint::from(23u32)));
        assert!(e.is_safe_prime(512, &bn(SAFE_512)));
        // 2^127 - 1 is prime but (2^127 - 2) / 2 = 2^126 - 1 is not
        let m127 = (BigUint::one() << 127u32) - 1u32;
        assert!(!e.is_safe_prime(127, &m127));
        assert!(!e.is_safe_prime(8, &BigUint::from(13u32)));
    }

    #[test]
    fn test_safe_prime_of_composite_is_false() {
        let n = bn(SAFE_512) * 3u32;
        assert!(!engine().is_safe_prime(512, &n));
    }

    #[test]
    fn test_rounds_schedule() {
        assert_eq!(rounds_for_bits(8192), 3);
        assert_eq!(rounds_for_bits(2048), 4);
        assert_eq!(rounds_for_bits(1024), 5);
        assert_eq!(rounds_for_bits(512), 5);
        assert_eq!(rounds_for_bits(64), 27);
        assert_eq!(rounds_for_bits(16), 34);
        for bits in (0..10_000).step_by(7) {
            assert!(rounds_for_bits(bits) >= MIN_ROUNDS);
            assert!(rounds_for_bits(bits) >= rounds_for_bits(bits + 1));
        }
    }

    #[test]
    fn test_min_rounds_floor() {
        let e = PrimalityEngine::new(0, WitnessRng::os());
        assert_eq!(e.rounds(8192), MIN_ROUNDS);
        let e = PrimalityEngine::new(16, WitnessRng::os());
        assert_eq!(e.rounds(8192), 16);
        assert_eq!(e.rounds(64), 27);
    }

    #[test]
    fn test_trial_division_precheck() {
        assert_eq!(trial_division_precheck(&BigUint::from(23u32)), (true, true));
        assert_eq!(trial_division_precheck(&BigUint::from(13u32)), (true, false));
        assert_eq!(trial_division_precheck(&BigUint::from(100u32)), (false, false));
        assert_eq!(trial_division_precheck(&BigUint::zero()), (false, false));
        // 2^61 - 1: (n-1)/2 = 2^60 - 1 is divisible by 3
        let m61 = (BigUint::one() << 61u32) - 1u32;
        assert_eq!(trial_division_precheck(&m61), (true, false));
        assert_eq!(trial_division_precheck(&bn(SAFE_512)), (true, true));
    }

    #[test]
    fn test_free_function_uses_os_witnesses() {
        assert!(is_prime(512, &bn(SAFE_512)));
        let m61 = (BigUint::one() << 61u32) - 1u32;
        let m127 = (BigUint::one() << 127u32) - 1u32;
        assert!(!is_prime(188, &(m61 * m127)));
    }
}
