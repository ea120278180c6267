/// Key-exchange parameter decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("truncated input: need {need} bytes, got {got}")]
    Truncated { need: usize, got: usize },
    #[error("zero-length {field} vector")]
    InvalidLength { field: &'static str },
    #[error("unsupported curve type: {0} (expected 3=named_curve)")]
    UnsupportedCurveType(u8),
    #[error("unknown named curve: 0x{0:04x}")]
    UnknownNamedCurve(u16),
}

impl ParseError {
    /// True if the input ended before a declared length was satisfied.
    pub fn is_truncated(&self) -> bool {
        matches!(self, ParseError::Truncated { .. })
    }
}
