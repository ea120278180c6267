#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok((key, consumed)) = kexaudit_tls::handshake::codec::parse_dh_params_with_len(data) {
        assert!(consumed <= data.len());
        let p_len = u16::from_be_bytes([data[0], data[1]]) as u32;
        assert_eq!(key.key_size_bits(), 8 * p_len);
        // Keep the primality work bounded: only small moduli reach the analyzer.
        if key.key_size_bits() <= 512 {
            let _ = kexaudit_dh::analyze(key, false);
        }
    }
});
