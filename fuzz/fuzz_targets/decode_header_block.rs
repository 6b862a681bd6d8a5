#![no_main]
use http_header::{decoder::decode_header_block, ParserCfg};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    decode_header_block(data, &ParserCfg::default()).ok();
});
