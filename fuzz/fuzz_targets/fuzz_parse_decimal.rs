#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    // Try to convert bytes to a valid UTF-8 string
    if let Ok(content) = std::str::from_utf8(data) {
        let fake_path = Path::new("fuzz.txt");

        // Parsing arbitrary text must error cleanly, never panic
        let _ = mulcheck::parser::parse_decimal(content, fake_path);
    }
});
