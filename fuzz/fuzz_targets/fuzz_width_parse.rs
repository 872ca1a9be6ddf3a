#![no_main]

use bitwidth_core::{BitWidth, WidthError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    match BitWidth::parse(text) {
        Ok(width) => {
            let rendered = width.to_string();
            assert_eq!(BitWidth::parse(&rendered), Ok(width));
            assert_eq!(width.mask().count_ones(), width.width().min(64));
        }
        Err(WidthError::Invalid { width }) => assert!(width < 0),
        Err(WidthError::Malformed { text: echoed }) => assert_eq!(echoed, text),
    }
});
