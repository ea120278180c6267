#![forbid(unsafe_code)]
#![doc = "Decoding of TLS key-exchange parameters for kexaudit."]

pub mod handshake;

pub use handshake::codec::{parse_dh_params, parse_ecdh_params};
pub use kexaudit_types::{NamedCurve, ParseError};
