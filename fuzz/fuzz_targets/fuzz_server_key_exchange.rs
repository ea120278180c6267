#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = kexaudit_tls::handshake::ske::decode_dhe_server_key_exchange(data);
    let _ = kexaudit_tls::handshake::ske::decode_ecdhe_server_key_exchange(data);
});
