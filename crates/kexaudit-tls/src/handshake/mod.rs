//! ServerKeyExchange parameter codecs (RFC 5246 §7.4.3, RFC 8422 §5.4).

pub mod codec;
pub mod ske;
