//! DH group and public key numbers.

use num_bigint::BigUint;

/// Modulus, generator and optional subgroup order of a DH group.
///
/// Equality is field-wise, so a group with `q = None` never equals one that
/// carries a subgroup order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterNumbers {
    p: BigUint,
    g: BigUint,
    q: Option<BigUint>,
}

impl ParameterNumbers {
    pub fn new(p: BigUint, g: BigUint, q: Option<BigUint>) -> Self {
        Self { p, g, q }
    }

    /// Prime modulus.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Generator.
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// Subgroup order, when published.
    pub fn q(&self) -> Option<&BigUint> {
        self.q.as_ref()
    }
}

/// Peer public value together with the group it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicNumbers {
    y: BigUint,
    parameters: ParameterNumbers,
}

impl PublicNumbers {
    pub fn new(y: BigUint, parameters: ParameterNumbers) -> Self {
        Self { y, parameters }
    }

    pub fn y(&self) -> &BigUint {
        &self.y
    }

    pub fn parameter_numbers(&self) -> &ParameterNumbers {
        &self.parameters
    }
}

/// A parsed DH public key.
///
/// `key_size_bits` is fixed when the key is decoded: eight times the encoded
/// length of `p`, not `p.bits()`. A modulus sent with a leading zero byte
/// therefore reports eight extra bits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicKey {
    public_numbers: PublicNumbers,
    key_size_bits: u32,
}

impl PublicKey {
    pub fn new(public_numbers: PublicNumbers, key_size_bits: u32) -> Self {
        Self {
            public_numbers,
            key_size_bits,
        }
    }

    pub fn public_numbers(&self) -> &PublicNumbers {
        &self.public_numbers
    }

    pub fn parameter_numbers(&self) -> &ParameterNumbers {
        self.public_numbers.parameter_numbers()
    }

    pub fn key_size_bits(&self) -> u32 {
        self.key_size_bits
    }
}
