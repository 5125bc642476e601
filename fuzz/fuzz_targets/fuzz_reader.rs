#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Fuzz wrapper stripping and JSON decoding with arbitrary input.
    // Malformed content must produce an error, never a panic.
    let _ = sidx::index::parse_index(data);
});
