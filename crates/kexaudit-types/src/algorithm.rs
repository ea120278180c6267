/// ECParameters curve type (RFC 4492 §5.4, RFC 8422 §5.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveType {
    /// Deprecated explicit prime-field curve parameters.
    ExplicitPrime,
    /// Deprecated explicit characteristic-2 curve parameters.
    ExplicitChar2,
    /// Curve identified by a NamedGroup codepoint.
    NamedCurve,
    /// Any other tag value.
    Other(u8),
}

impl CurveType {
    pub const EXPLICIT_PRIME_TAG: u8 = 1;
    pub const EXPLICIT_CHAR2_TAG: u8 = 2;
    pub const NAMED_CURVE_TAG: u8 = 3;

    /// Wire value of this curve type.
    pub fn tag(self) -> u8 {
        match self {
            CurveType::ExplicitPrime => Self::EXPLICIT_PRIME_TAG,
            CurveType::ExplicitChar2 => Self::EXPLICIT_CHAR2_TAG,
            CurveType::NamedCurve => Self::NAMED_CURVE_TAG,
            CurveType::Other(tag) => tag,
        }
    }
}

impl From<u8> for CurveType {
    fn from(tag: u8) -> Self {
        match tag {
            Self::EXPLICIT_PRIME_TAG => CurveType::ExplicitPrime,
            Self::EXPLICIT_CHAR2_TAG => CurveType::ExplicitChar2,
            Self::NAMED_CURVE_TAG => CurveType::NamedCurve,
            other => CurveType::Other(other),
        }
    }
}

/// Elliptic curve groups from the IANA TLS Supported Groups registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedCurve {
    Sect163k1,
    Sect163r1,
    Sect163r2,
    Sect193r1,
    Sect193r2,
    Sect233k1,
    Sect233r1,
    Sect239k1,
    Sect283k1,
    Sect283r1,
    Sect409k1,
    Sect409r1,
    Sect571k1,
    Sect571r1,
    Secp160k1,
    Secp160r1,
    Secp160r2,
    Secp192k1,
    Secp192r1,
    Secp224k1,
    Secp224r1,
    Secp256k1,
    Secp256r1,
    Secp384r1,
    Secp521r1,
    BrainpoolP256r1,
    BrainpoolP384r1,
    BrainpoolP512r1,
    X25519,
    X448,
    BrainpoolP256r1Tls13,
    BrainpoolP384r1Tls13,
    BrainpoolP512r1Tls13,
    /// SM2 curve (RFC 8998).
    CurveSm2,
}

impl NamedCurve {
    /// Every supported curve, in codepoint order.
    pub const ALL: [NamedCurve; 34] = [
        NamedCurve::Sect163k1,
        NamedCurve::Sect163r1,
        NamedCurve::Sect163r2,
        NamedCurve::Sect193r1,
        NamedCurve::Sect193r2,
        NamedCurve::Sect233k1,
        NamedCurve::Sect233r1,
        NamedCurve::Sect239k1,
        NamedCurve::Sect283k1,
        NamedCurve::Sect283r1,
        NamedCurve::Sect409k1,
        NamedCurve::Sect409r1,
        NamedCurve::Sect571k1,
        NamedCurve::Sect571r1,
        NamedCurve::Secp160k1,
        NamedCurve::Secp160r1,
        NamedCurve::Secp160r2,
        NamedCurve::Secp192k1,
        NamedCurve::Secp192r1,
        NamedCurve::Secp224k1,
        NamedCurve::Secp224r1,
        NamedCurve::Secp256k1,
        NamedCurve::Secp256r1,
        NamedCurve::Secp384r1,
        NamedCurve::Secp521r1,
        NamedCurve::BrainpoolP256r1,
        NamedCurve::BrainpoolP384r1,
        NamedCurve::BrainpoolP512r1,
        NamedCurve::X25519,
        NamedCurve::X448,
        NamedCurve::BrainpoolP256r1Tls13,
        NamedCurve::BrainpoolP384r1Tls13,
        NamedCurve::BrainpoolP512r1Tls13,
        NamedCurve::CurveSm2,
    ];

    /// Resolve a NamedGroup codepoint. Returns `None` for unassigned or
    /// non-EC codepoints (e.g. FFDHE groups).
    pub fn from_u16(id: u16) -> Option<Self> {
        let curve = match id {
            0x0001 => NamedCurve::Sect163k1,
            0x0002 => NamedCurve::Sect163r1,
            0x0003 => NamedCurve::Sect163r2,
            0x0004 => NamedCurve::Sect193r1,
            0x0005 => NamedCurve::Sect193r2,
            0x0006 => NamedCurve::Sect233k1,
            0x0007 => NamedCurve::Sect233r1,
            0x0008 => NamedCurve::Sect239k1,
            0x0009 => NamedCurve::Sect283k1,
            0x000A => NamedCurve::Sect283r1,
            0x000B => NamedCurve::Sect409k1,
            0x000C => NamedCurve::Sect409r1,
            0x000D => NamedCurve::Sect571k1,
            0x000E => NamedCurve::Sect571r1,
            0x000F => NamedCurve::Secp160k1,
            0x0010 => NamedCurve::Secp160r1,
            0x0011 => NamedCurve::Secp160r2,
            0x0012 => NamedCurve::Secp192k1,
            0x0013 => NamedCurve::Secp192r1,
            0x0014 => NamedCurve::Secp224k1,
            0x0015 => NamedCurve::Secp224r1,
            0x0016 => NamedCurve::Secp256k1,
            0x0017 => NamedCurve::Secp256r1,
            0x0018 => NamedCurve::Secp384r1,
            0x0019 => NamedCurve::Secp521r1,
            0x001A => NamedCurve::BrainpoolP256r1,
            0x001B => NamedCurve::BrainpoolP384r1,
            0x001C => NamedCurve::BrainpoolP512r1,
            0x001D => NamedCurve::X25519,
            0x001E => NamedCurve::X448,
            0x001F => NamedCurve::BrainpoolP256r1Tls13,
            0x0020 => NamedCurve::BrainpoolP384r1Tls13,
            0x0021 => NamedCurve::BrainpoolP512r1Tls13,
            0x0029 => NamedCurve::CurveSm2,
            _ => return None,
        };
        Some(curve)
    }

    /// NamedGroup codepoint of this curve.
    pub fn id(self) -> u16 {
        match self {
            NamedCurve::CurveSm2 => 0x0029,
            // Remaining codepoints are contiguous starting at 1.
            other => Self::ALL
                .iter()
                .position(|c| *c == other)
                .map_or(0, |i| i as u16 + 1),
        }
    }

    /// Registry name of the curve.
    pub fn name(self) -> &'static str {
        match self {
            NamedCurve::Sect163k1 => "sect163k1",
            NamedCurve::Sect163r1 => "sect163r1",
            NamedCurve::Sect163r2 => "sect163r2",
            NamedCurve::Sect193r1 => "sect193r1",
            NamedCurve::Sect193r2 => "sect193r2",
            NamedCurve::Sect233k1 => "sect233k1",
            NamedCurve::Sect233r1 => "sect233r1",
            NamedCurve::Sect239k1 => "sect239k1",
            NamedCurve::Sect283k1 => "sect283k1",
            NamedCurve::Sect283r1 => "sect283r1",
            NamedCurve::Sect409k1 => "sect409k1",
            NamedCurve::Sect409r1 => "sect409r1",
            NamedCurve::Sect571k1 => "sect571k1",
            NamedCurve::Sect571r1 => "sect571r1",
            NamedCurve::Secp160k1 => "secp160k1",
            NamedCurve::Secp160r1 => "secp160r1",
            NamedCurve::Secp160r2 => "secp160r2",
            NamedCurve::Secp192k1 => "secp192k1",
            NamedCurve::Secp192r1 => "secp192r1",
            NamedCurve::Secp224k1 => "secp224k1",
            NamedCurve::Secp224r1 => "secp224r1",
            NamedCurve::Secp256k1 => "secp256k1",
            NamedCurve::Secp256r1 => "secp256r1",
            NamedCurve::Secp384r1 => "secp384r1",
            NamedCurve::Secp521r1 => "secp521r1",
            NamedCurve::BrainpoolP256r1 => "brainpoolP256r1",
            NamedCurve::BrainpoolP384r1 => "brainpoolP384r1",
            NamedCurve::BrainpoolP512r1 => "brainpoolP512r1",
            NamedCurve::X25519 => "x25519",
            NamedCurve::X448 => "x448",
            NamedCurve::BrainpoolP256r1Tls13 => "brainpoolP256r1tls13",
            NamedCurve::BrainpoolP384r1Tls13 => "brainpoolP384r1tls13",
            NamedCurve::BrainpoolP512r1Tls13 => "brainpoolP512r1tls13",
            NamedCurve::CurveSm2 => "curveSM2",
        }
    }
}

impl std::fmt::Display for NamedCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// TLS signature scheme identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignatureScheme(pub u16);

impl SignatureScheme {
    pub const RSA_PKCS1_SHA1: Self = Self(0x0201);
    pub const ECDSA_SHA1: Self = Self(0x0203);
    pub const RSA_PKCS1_SHA256: Self = Self(0x0401);
    pub const RSA_PKCS1_SHA384: Self = Self(0x0501);
    pub const RSA_PKCS1_SHA512: Self = Self(0x0601);
    pub const ECDSA_SECP256R1_SHA256: Self = Self(0x0403);
    pub const ECDSA_SECP384R1_SHA384: Self = Self(0x0503);
    pub const ECDSA_SECP521R1_SHA512: Self = Self(0x0603);
    pub const RSA_PSS_RSAE_SHA256: Self = Self(0x0804);
    pub const RSA_PSS_RSAE_SHA384: Self = Self(0x0805);
    pub const RSA_PSS_RSAE_SHA512: Self = Self(0x0806);
    pub const ED25519: Self = Self(0x0807);
    pub const SM2_SM3: Self = Self(0x0708);
}
