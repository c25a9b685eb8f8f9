#![no_main]

use edifact_orders::edifact::{Segment, SyntaxConfig, tokenize_segment};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Every element must survive render → tokenize unchanged.
        let syntax = SyntaxConfig::default();
        let segment = Segment::new("FTX", s.split('\u{1f}'));
        if let Ok(rendered) = segment.render(&syntax) {
            assert_eq!(tokenize_segment(&rendered, &syntax), Some(segment));
        }
    }
});
