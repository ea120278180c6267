#![forbid(unsafe_code)]
#![doc = "Common error types and TLS key-exchange identifiers for kexaudit."]

pub mod algorithm;
pub mod error;

pub use algorithm::*;
pub use error::*;
