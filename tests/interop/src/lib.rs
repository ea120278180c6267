//! Integration tests for kexaudit.
//! Wire-format decoding through catalog lookup and primality analysis.

#[cfg(test)]
mod tests {
    use kexaudit_dh::{well_known_groups, AnalyzerConfig, DhAnalyzer, PublicKey};
    use kexaudit_tls::handshake::codec::{encode_dh_params, encode_ecdh_params};
    use kexaudit_tls::handshake::ske::{
        decode_dhe_server_key_exchange, decode_ecdhe_server_key_exchange,
        encode_dhe_server_key_exchange,
    };
    use kexaudit_tls::{parse_dh_params, parse_ecdh_params};
    use kexaudit_types::{NamedCurve, ParseError, SignatureScheme};
    use num_bigint::BigUint;

    fn hex(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }

    fn analyzer() -> DhAnalyzer {
        DhAnalyzer::new(AnalyzerConfig::builder().witness_seed(11).build())
    }

    fn wire(p: &BigUint, g: &BigUint, y: &[u8]) -> Vec<u8> {
        encode_dh_params(&p.to_bytes_be(), &g.to_bytes_be(), y)
    }

    // -------------------------------------------------------
    // 1. RFC 3526 groups sent over the wire hit the catalog
    // -------------------------------------------------------
    #[test]
    fn test_rfc3526_groups_from_wire() {
        for entry in well_known_groups().iter().filter(|e| e.source() == "RFC3526") {
            let params = entry.parameters();
            let data = wire(params.p(), params.g(), &[0x5A; 32]);
            let key = parse_dh_params(&data).unwrap();
            assert_eq!(key.key_size_bits(), entry.key_size_bits());

            let result = analyzer().analyze(key, false);
            assert_eq!(result.well_known(), Some(entry));
            assert!(result.prime() && result.safe_prime());
        }
    }

    // -------------------------------------------------------
    // 2. RFC 5114 groups carry q, which the wire format cannot
    // -------------------------------------------------------
    #[test]
    fn test_rfc5114_groups_from_wire_are_tested() {
        let entry = &well_known_groups()[6];
        let params = entry.parameters();
        let data = wire(params.p(), params.g(), &[0x01; 128]);
        let result = analyzer().analyze(parse_dh_params(&data).unwrap(), false);
        assert!(result.well_known().is_none());
        assert!(result.prime());
        assert!(!result.safe_prime());
    }

    // -------------------------------------------------------
    // 3. Leading zero in dh_p: same group, inflated key size
    // -------------------------------------------------------
    #[test]
    fn test_leading_zero_modulus() {
        let entry = &well_known_groups()[1];
        let mut p = vec![0x00];
        p.extend_from_slice(&entry.parameters().p().to_bytes_be());
        let data = encode_dh_params(&p, &[0x02], &[0x03]);

        let key = parse_dh_params(&data).unwrap();
        assert_eq!(key.key_size_bits(), 2056);
        let result = analyzer().analyze(key, false);
        assert_eq!(result.well_known(), Some(entry));
        assert_eq!(result.key_size_bits(), 2056);
    }

    // -------------------------------------------------------
    // 3b. Zero-padded composite modulus is never reported prime
    // -------------------------------------------------------
    #[test]
    fn test_padded_composite_modulus() {
        for padded_len in [256usize, 1024] {
            let mut p = vec![0u8; padded_len - 3];
            p.extend_from_slice(&[0x02, 0x3C, 0xB3]);
            let data = encode_dh_params(&p, &[0x02], &[0x05]);
            let key = parse_dh_params(&data).unwrap();
            assert_eq!(key.key_size_bits(), 8 * padded_len as u32);

            let prime_reports = (0..2000u64)
                .filter(|&seed| {
                    let analyzer =
                        DhAnalyzer::new(AnalyzerConfig::builder().witness_seed(seed).build());
                    analyzer.analyze(key.clone(), false).prime()
                })
                .count();
            assert_eq!(prime_reports, 0, "{padded_len}-byte p");
        }
    }

    // -------------------------------------------------------
    // 4. One bad capture does not affect the others
    // -------------------------------------------------------
    #[test]
    fn test_failures_are_isolated() {
        let good = wire(&BigUint::from(23u32), &BigUint::from(5u32), &[0x08]);
        let captures: Vec<Vec<u8>> = vec![
            good.clone(),
            good[..good.len() - 1].to_vec(),
            hex("0000"),
            good.clone(),
        ];

        let analyzer = analyzer();
        let mut seen: Vec<PublicKey> = Vec::new();
        let mut results = Vec::new();
        let mut errors = Vec::new();
        for capture in &captures {
            match parse_dh_params(capture) {
                Ok(key) => {
                    let reused = seen.contains(&key);
                    seen.push(key.clone());
                    results.push(analyzer.analyze(key, reused));
                }
                Err(e) => errors.push(e),
            }
        }

        assert_eq!(results.len(), 2);
        assert!(!results[0].reused());
        assert!(results[1].reused());
        assert!(results.iter().all(|r| r.safe_prime()));
        assert_eq!(
            errors,
            [
                ParseError::Truncated { need: 1, got: 0 },
                ParseError::InvalidLength { field: "dh_p" },
            ]
        );
    }

    // -------------------------------------------------------
    // 5. DHE ServerKeyExchange straight into the analyzer
    // -------------------------------------------------------
    #[test]
    fn test_dhe_server_key_exchange_analysis() {
        let entry = &well_known_groups()[0];
        let body = encode_dhe_server_key_exchange(
            &entry.parameters().p().to_bytes_be(),
            &[0x02],
            &[0x42; 192],
            SignatureScheme::RSA_PKCS1_SHA256,
            &[0xEE; 256],
        );
        let ske = decode_dhe_server_key_exchange(&body).unwrap();
        assert_eq!(ske.signature.len(), 256);
        let result = analyzer().analyze(ske.public_key, false);
        assert_eq!(result.well_known().map(|e| e.key_size_bits()), Some(1536));
    }

    // -------------------------------------------------------
    // 6. ECDHE parameters: curve type errors vs truncation
    // -------------------------------------------------------
    #[test]
    fn test_ecdhe_parameters() {
        let params = encode_ecdh_params(NamedCurve::Secp521r1, &[0x04; 133]);
        let (curve, point) = parse_ecdh_params(&params).unwrap();
        assert_eq!(curve, NamedCurve::Secp521r1);
        assert_eq!(point.len(), 133);

        let mut explicit = params.clone();
        explicit[0] = 2;
        assert_eq!(
            parse_ecdh_params(&explicit).unwrap_err(),
            ParseError::UnsupportedCurveType(2)
        );
        assert!(parse_ecdh_params(&params[..50]).unwrap_err().is_truncated());

        let mut body = params;
        body.extend_from_slice(&hex("08070040"));
        body.extend_from_slice(&[0x55; 64]);
        let ske = decode_ecdhe_server_key_exchange(&body).unwrap();
        assert_eq!(ske.signature_algorithm, SignatureScheme::ED25519);
        assert_eq!(ske.named_curve, NamedCurve::Secp521r1);
    }

    // -------------------------------------------------------
    // 7. Engine and analyzer agree on custom groups
    // -------------------------------------------------------
    #[test]
    fn test_engine_agrees_with_analyzer() {
        let p = BigUint::from(1_000_000_007u64);
        let data = wire(&p, &BigUint::from(5u32), &[0x10]);
        let result = analyzer().analyze(parse_dh_params(&data).unwrap(), false);
        let mut engine =
            kexaudit_bignum::PrimalityEngine::new(0, kexaudit_bignum::WitnessRng::seeded(3));
        assert_eq!(result.prime(), engine.is_prime(32, &p));
        assert_eq!(result.safe_prime(), engine.is_safe_prime(32, &p));
    }
}
