#![no_main]
use http_header::decoder::parse_elements;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        parse_elements(s);
    }
});
