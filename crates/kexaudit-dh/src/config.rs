//! Analyzer configuration with builder pattern.

use kexaudit_bignum::{PrimalityEngine, WitnessRng, MIN_ROUNDS};

/// Settings for [`DhAnalyzer`](crate::DhAnalyzer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Floor on Miller-Rabin rounds. Values below [`MIN_ROUNDS`] are raised.
    pub min_rounds: usize,
    /// Seed for witness selection. `None` draws witnesses from the OS RNG.
    pub witness_seed: Option<u64>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_rounds: MIN_ROUNDS,
            witness_seed: None,
        }
    }
}

impl AnalyzerConfig {
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }

    /// A fresh primality engine for one analysis.
    pub(crate) fn primality_engine(&self) -> PrimalityEngine {
        PrimalityEngine::new(self.min_rounds, WitnessRng::from_seed(self.witness_seed))
    }
}

/// Builder for `AnalyzerConfig`.
#[derive(Debug, Default)]
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    pub fn min_rounds(mut self, rounds: usize) -> Self {
        self.config.min_rounds = rounds;
        self
    }

    pub fn witness_seed(mut self, seed: u64) -> Self {
        self.config.witness_seed = Some(seed);
        self
    }

    pub fn build(self) -> AnalyzerConfig {
        AnalyzerConfig {
            min_rounds: self.config.min_rounds.max(MIN_ROUNDS),
            ..self.config
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.min_rounds, MIN_ROUNDS);
        assert_eq!(config.witness_seed, None);
        assert_eq!(AnalyzerConfig::builder().build(), config);
    }

    #[test]
    fn test_builder() {
        let config = AnalyzerConfig::builder()
            .min_rounds(12)
            .witness_seed(42)
            .build();
        assert_eq!(config.min_rounds, 12);
        assert_eq!(config.witness_seed, Some(42));
        assert_eq!(config.primality_engine().rounds(8192), 12);
    }

    #[test]
    fn test_builder_clamps_rounds() {
        let config = AnalyzerConfig::builder().min_rounds(0).build();
        assert_eq!(config.min_rounds, MIN_ROUNDS);
    }
}
