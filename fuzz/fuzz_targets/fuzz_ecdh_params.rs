#![no_main]
use kexaudit_tls::ParseError;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    match kexaudit_tls::parse_ecdh_params(data) {
        Ok((_, point)) => assert!(!point.is_empty() && point.len() <= 255),
        Err(ParseError::UnsupportedCurveType(tag)) => assert_eq!(Some(&tag), data.first()),
        Err(_) => {}
    }
});
