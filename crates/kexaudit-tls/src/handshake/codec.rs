//! DH and ECDH key-exchange parameter encoding/decoding.
//!
//! ```text
//! ServerDHParams   = dh_p<1..2^16-1> || dh_g<1..2^16-1> || dh_Ys<1..2^16-1>
//! ServerECDHParams = curve_type(1) || named_curve(2) || point<1..2^8-1>
//! ```
//!
//! Trailing bytes after the parameters (the signature in a ServerKeyExchange)
//! are left for the caller.

use kexaudit_dh::{ParameterNumbers, PublicKey, PublicNumbers};
use kexaudit_types::{CurveType, NamedCurve, ParseError};
use num_bigint::BigUint;
use tracing::trace;

/// Cursor over a handshake body.
pub(crate) struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub(crate) fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], ParseError> {
        if self.remaining() < len {
            return Err(ParseError::Truncated {
                need: len,
                got: self.remaining(),
            });
        }
        let out = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8, ParseError> {
        Ok(self.read_bytes(1)?[0])
    }

    pub(crate) fn read_u16(&mut self) -> Result<u16, ParseError> {
        let b = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    /// `opaque field<1..2^16-1>`
    pub(crate) fn read_vec_u16(&mut self, field: &'static str) -> Result<&'a [u8], ParseError> {
        let len = self.read_u16()? as usize;
        if len == 0 {
            return Err(ParseError::InvalidLength { field });
        }
        self.read_bytes(len)
    }

    /// `opaque field<1..2^8-1>`
    pub(crate) fn read_vec_u8(&mut self, field: &'static str) -> Result<&'a [u8], ParseError> {
        let len = self.read_u8()? as usize;
        if len == 0 {
            return Err(ParseError::InvalidLength { field });
        }
        self.read_bytes(len)
    }
}

/// Decode ServerDHParams into a public key.
///
/// The key size is eight times the encoded length of `dh_p`, leading zero
/// bytes included.
pub fn parse_dh_params(data: &[u8]) -> Result<PublicKey, ParseError> {
    parse_dh_params_with_len(data).map(|(key, _)| key)
}

/// Like [`parse_dh_params`], also returning the number of bytes consumed.
pub fn parse_dh_params_with_len(data: &[u8]) -> Result<(PublicKey, usize), ParseError> {
    let mut reader = Reader::new(data);
    let key = read_dh_params(&mut reader)?;
    Ok((key, reader.position()))
}

pub(crate) fn read_dh_params(reader: &mut Reader<'_>) -> Result<PublicKey, ParseError> {
    let p = reader.read_vec_u16("dh_p")?;
    let g = reader.read_vec_u16("dh_g")?;
    let y = reader.read_vec_u16("dh_Ys")?;
    trace!(p_len = p.len(), g_len = g.len(), y_len = y.len(), "ServerDHParams");

    let parameters = ParameterNumbers::new(
        BigUint::from_bytes_be(p),
        BigUint::from_bytes_be(g),
        None,
    );
    let public_numbers = PublicNumbers::new(BigUint::from_bytes_be(y), parameters);
    Ok(PublicKey::new(public_numbers, 8 * p.len() as u32))
}

/// Decode ServerECDHParams into the named curve and the raw point bytes.
///
/// The point is returned as sent; it is not decompressed or validated.
pub fn parse_ecdh_params(data: &[u8]) -> Result<(NamedCurve, Vec<u8>), ParseError> {
    parse_ecdh_params_with_len(data).map(|(curve, point, _)| (curve, point))
}

/// Like [`parse_ecdh_params`], also returning the number of bytes consumed.
pub fn parse_ecdh_params_with_len(
    data: &[u8],
) -> Result<(NamedCurve, Vec<u8>, usize), ParseError> {
    let mut reader = Reader::new(data);
    let (curve, point) = read_ecdh_params(&mut reader)?;
    Ok((curve, point, reader.position()))
}

pub(crate) fn read_ecdh_params(
    reader: &mut Reader<'_>,
) -> Result<(NamedCurve, Vec<u8>), ParseError> {
    let tag = reader.read_u8()?;
    match CurveType::from(tag) {
        CurveType::NamedCurve => {}
        CurveType::ExplicitPrime | CurveType::ExplicitChar2 | CurveType::Other(_) => {
            return Err(ParseError::UnsupportedCurveType(tag));
        }
    }

    let id = reader.read_u16()?;
    let curve = NamedCurve::from_u16(id).ok_or(ParseError::UnknownNamedCurve(id))?;
    let point = reader.read_vec_u8("point")?;
    trace!(%curve, point_len = point.len(), "ServerECDHParams");
    Ok((curve, point.to_vec()))
}

/// Encode ServerDHParams from big-endian byte strings.
///
/// Each value must be 1..=65535 bytes. Leading zero bytes are kept, so the
/// encoding of `p` decides the decoded key size.
pub fn encode_dh_params(p: &[u8], g: &[u8], y: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(6 + p.len() + g.len() + y.len());
    for value in [p, g, y] {
        debug_assert!((1..=0xFFFF).contains(&value.len()), "DH value length out of range");
        out.extend_from_slice(&(value.len() as u16).to_be_bytes());
        out.extend_from_slice(value);
    }
    out
}

/// Encode ServerECDHParams for a named curve. `point` must be 1..=255 bytes.
pub fn encode_ecdh_params(curve: NamedCurve, point: &[u8]) -> Vec<u8> {
    debug_assert!((1..=0xFF).contains(&point.len()), "EC point length out of range");
    let mut out = Vec::with_capacity(4 + point.len());
    out.push(CurveType::NAMED_CURVE_TAG);
    out.extend_from_slice(&curve.id().to_be_bytes());
    out.push(point.len() as u8);
    out.extend_from_slice(point);
    out
}
