#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Fuzz the text kernels with arbitrary strings.
    // These should not panic or index out of bounds.
    let _ = sidx::utils::extract_terms(data);
    let _ = sidx::utils::stem(data);
    let _ = sidx::utils::slugify(data);
});
