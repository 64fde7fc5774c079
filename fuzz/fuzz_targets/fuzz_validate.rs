//! Fuzz target for card number checks.
//!
//! Tests that normalization and checking never panic and agree with each other.

#![no_main]

use basai_pay::{check, classify_str, is_valid, normalize, passes_luhn};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = classify_str(data);
    let _ = is_valid(data);

    match normalize(data) {
        Ok(number) => {
            let result = check(data).expect("normalize succeeded, check must too");
            assert_eq!(result.brand(), number.brand());
            assert_eq!(result.luhn_valid(), passes_luhn(data));
            assert_eq!(result.length(), number.len());
        }
        Err(_) => {
            assert!(check(data).is_err());
            assert!(!passes_luhn(data));
        }
    }
});
