#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u64, bool)| {
    let (n, south) = input;
    let region = if south { docso::Region::South } else { docso::Region::North };
    match docso::convert(n, region) {
        Ok(s) => {
            assert!(!s.is_empty());
            assert!(!s.contains("  "));
        }
        Err(_) => assert!(n > docso::MAX_NUMBER),
    }
});
