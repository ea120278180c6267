//! TLS 1.2 ServerKeyExchange bodies for DHE and ECDHE.
//!
//! ```text
//! ServerKeyExchange = params || signature_algorithm(2) || signature<0..2^16-1>
//! ```

use kexaudit_dh::PublicKey;
use kexaudit_types::{NamedCurve, ParseError, SignatureScheme};

use super::codec::{encode_dh_params, encode_ecdh_params, read_dh_params, read_ecdh_params, Reader};

/// ServerKeyExchange for DHE cipher suites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DheServerKeyExchange {
    pub public_key: PublicKey,
    pub signature_algorithm: SignatureScheme,
    pub signature: Vec<u8>,
}

/// ServerKeyExchange for ECDHE cipher suites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcdheServerKeyExchange {
    pub named_curve: NamedCurve,
    /// Encoded EC point, as sent.
    pub public_point: Vec<u8>,
    pub signature_algorithm: SignatureScheme,
    pub signature: Vec<u8>,
}

fn read_signature(reader: &mut Reader<'_>) -> Result<(SignatureScheme, Vec<u8>), ParseError> {
    let scheme = SignatureScheme(reader.read_u16()?);
    let sig_len = reader.read_u16()? as usize;
    let signature = reader.read_bytes(sig_len)?.to_vec();
    Ok((scheme, signature))
}

fn write_signature(out: &mut Vec<u8>, scheme: SignatureScheme, signature: &[u8]) {
    debug_assert!(signature.len() <= 0xFFFF, "signature length out of range");
    out.extend_from_slice(&scheme.0.to_be_bytes());
    out.extend_from_slice(&(signature.len() as u16).to_be_bytes());
    out.extend_from_slice(signature);
}

/// Decode a DHE ServerKeyExchange body (without handshake header).
pub fn decode_dhe_server_key_exchange(body: &[u8]) -> Result<DheServerKeyExchange, ParseError> {
    let mut reader = Reader::new(body);
    let public_key = read_dh_params(&mut reader)?;
    let (signature_algorithm, signature) = read_signature(&mut reader)?;
    Ok(DheServerKeyExchange {
        public_key,
        signature_algorithm,
        signature,
    })
}

/// Decode an ECDHE ServerKeyExchange body (without handshake header).
pub fn decode_ecdhe_server_key_exchange(
    body: &[u8],
) -> Result<EcdheServerKeyExchange, ParseError> {
    let mut reader = Reader::new(body);
    let (named_curve, public_point) = read_ecdh_params(&mut reader)?;
    let (signature_algorithm, signature) = read_signature(&mut reader)?;
    Ok(EcdheServerKeyExchange {
        named_curve,
        public_point,
        signature_algorithm,
        signature,
    })
}

/// Encode a DHE ServerKeyExchange body from raw big-endian values.
pub fn encode_dhe_server_key_exchange(
    p: &[u8],
    g: &[u8],
    y: &[u8],
    signature_algorithm: SignatureScheme,
    signature: &[u8],
) -> Vec<u8> {
    let mut body = encode_dh_params(p, g, y);
    write_signature(&mut body, signature_algorithm, signature);
    body
}

/// Encode an ECDHE ServerKeyExchange body.
pub fn encode_ecdhe_server_key_exchange(ske: &EcdheServerKeyExchange) -> Vec<u8> {
    let mut body = encode_ecdh_params(ske.named_curve, &ske.public_point);
    write_signature(&mut body, ske.signature_algorithm, &ske.signature);
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn test_encode_decode_dhe_server_key_exchange() {
        let p = [0xFFu8; 256];
        let body = encode_dhe_server_key_exchange(
            &p,
            &[0x02],
            &[0x11; 256],
            SignatureScheme::RSA_PSS_RSAE_SHA256,
            &[0xAA; 256],
        );
        let ske = decode_dhe_server_key_exchange(&body).unwrap();
        assert_eq!(ske.public_key.key_size_bits(), 2048);
        assert_eq!(ske.public_key.parameter_numbers().g(), &BigUint::from(2u32));
        assert_eq!(ske.signature_algorithm, SignatureScheme::RSA_PSS_RSAE_SHA256);
        assert_eq!(ske.signature, vec![0xAA; 256]);
    }

    #[test]
    fn test_encode_decode_ecdhe_server_key_exchange() {
        let ske = EcdheServerKeyExchange {
            named_curve: NamedCurve::Secp256r1,
            public_point: vec![0x04; 65],
            signature_algorithm: SignatureScheme::ECDSA_SECP256R1_SHA256,
            signature: vec![0x30; 72],
        };
        let body = encode_ecdhe_server_key_exchange(&ske);
        assert_eq!(body.len(), 4 + 65 + 4 + 72);
        assert_eq!(decode_ecdhe_server_key_exchange(&body).unwrap(), ske);
    }

    #[test]
    fn test_dhe_signature_truncated() {
        let body = encode_dhe_server_key_exchange(
            &[0x17],
            &[0x05],
            &[0x08],
            SignatureScheme::RSA_PKCS1_SHA256,
            &[0x01; 64],
        );
        let err = decode_dhe_server_key_exchange(&body[..body.len() - 1]).unwrap_err();
        assert_eq!(err, ParseError::Truncated { need: 64, got: 63 });
        // Params alone, signature missing entirely
        let err = decode_dhe_server_key_exchange(&body[..9]).unwrap_err();
        assert!(err.is_truncated());
    }

    #[test]
    fn test_ecdhe_explicit_curve_rejected() {
        let mut body = encode_ecdhe_server_key_exchange(&EcdheServerKeyExchange {
            named_curve: NamedCurve::X25519,
            public_point: vec![0x09; 32],
            signature_algorithm: SignatureScheme::ED25519,
            signature: vec![0x00; 64],
        });
        body[0] = 1;
        assert_eq!(
            decode_ecdhe_server_key_exchange(&body).unwrap_err(),
            ParseError::UnsupportedCurveType(1)
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "signature length out of range")]
    fn test_encode_rejects_oversized_signature() {
        encode_dhe_server_key_exchange(
            &[0x17],
            &[0x05],
            &[0x08],
            SignatureScheme::RSA_PKCS1_SHA256,
            &vec![0xEE; 0x1_0000],
        );
    }
}
