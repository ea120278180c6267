#![forbid(unsafe_code)]
#![doc = "Diffie-Hellman key-exchange parameter analysis for kexaudit."]

pub mod analyzer;
pub mod config;
pub mod groups;
pub mod params;

pub use analyzer::{analyze, AnalysisResult, DhAnalyzer};
pub use config::{AnalyzerConfig, AnalyzerConfigBuilder};
pub use groups::{lookup_by_name, match_well_known, well_known_groups, WellKnownEntry};
pub use num_bigint::BigUint;
pub use params::{ParameterNumbers, PublicKey, PublicNumbers};
