#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let (number, region) = s.split_once('|').unwrap_or((s, "north"));
        let _ = docso::convert_str(number, region);
    }
});
