#![no_main]

use edifact_orders::edifact::{SyntaxConfig, tokenize_segment};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic. Errors are fine.
        let syntax = SyntaxConfig::default();
        if let Some(segment) = tokenize_segment(s, &syntax) {
            let _ = segment.render(&syntax);
        }
    }
});
