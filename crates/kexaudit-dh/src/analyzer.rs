//! DH parameter analysis.
//!
//! A received group is first looked up in the well-known catalog. Catalog
//! groups are reported prime and safe-prime on the strength of the match
//! alone; everything else goes through the primality engine.

use num_bigint::BigUint;
use tracing::debug;

use kexaudit_bignum::trial_division_precheck;

use crate::config::AnalyzerConfig;
use crate::groups::{match_well_known, WellKnownEntry};
use crate::params::PublicKey;

/// Outcome of analyzing one DH public key. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    public_key: PublicKey,
    reused: bool,
    well_known: Option<&'static WellKnownEntry>,
    prime: bool,
    safe_prime: bool,
}

impl AnalysisResult {
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Whether the caller had already seen this public key in the session.
    pub fn reused(&self) -> bool {
        self.reused
    }

    pub fn well_known(&self) -> Option<&'static WellKnownEntry> {
        self.well_known
    }

    pub fn prime(&self) -> bool {
        self.prime
    }

    pub fn safe_prime(&self) -> bool {
        self.safe_prime
    }

    /// Key size as decoded from the wire.
    pub fn key_size_bits(&self) -> u32 {
        self.public_key.key_size_bits()
    }
}

/// Analyzes DH public keys against the catalog and the primality engine.
#[derive(Debug, Clone, Default)]
pub struct DhAnalyzer {
    config: AnalyzerConfig,
}

impl DhAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze `public_key`. `reused` comes from the caller's session cache.
    pub fn analyze(&self, public_key: PublicKey, reused: bool) -> AnalysisResult {
        let parameters = public_key.parameter_numbers();

        match match_well_known(parameters) {
            Some(entry) => {
                // Catalog groups are trusted by value; never re-test them.
                debug!(group = %entry, "well-known DH group");
                AnalysisResult {
                    public_key,
                    reused,
                    well_known: Some(entry),
                    prime: true,
                    safe_prime: true,
                }
            }
            None => {
                let bits = public_key.key_size_bits();
                let p = parameters.p();

                // Informational only: the full test below always runs.
                let (probably_prime, probably_safe) = trial_division_precheck(p);
                debug!(bits, probably_prime, probably_safe, "custom DH group precheck");

                let mut engine = self.config.primality_engine();
                let prime = engine.is_prime(bits, p);
                let safe_prime = prime && engine.is_prime(bits, &half(p));
                debug!(bits, prime, safe_prime, "custom DH group tested");

                AnalysisResult {
                    public_key,
                    reused,
                    well_known: None,
                    prime,
                    safe_prime,
                }
            }
        }
    }
}

/// Analyze with the default configuration.
pub fn analyze(public_key: PublicKey, reused: bool) -> AnalysisResult {
    DhAnalyzer::default().analyze(public_key, reused)
}

/// (p - 1) / 2, only called once p is known prime.
fn half(p: &BigUint) -> BigUint {
    (p - 1u32) >> 1u32
}
