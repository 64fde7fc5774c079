//! Fuzz target for form input formatting.
//!
//! Tests that formatting functions never panic on arbitrary input.

#![no_main]

use basai_pay::format;
use basai_pay::validate::is_input_whitespace;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = format::format_expiry_input(data);
    let cvv = format::sanitize_cvv_input(data);
    assert!(cvv.len() <= format::CVV_MAX_DIGITS);

    // Formatting only moves whitespace around
    let formatted = format::format_card_input(data);
    let stripped: String = data.chars().filter(|&c| !is_input_whitespace(c)).collect();
    let unformatted: String = formatted.chars().filter(|&c| c != ' ').collect();
    assert_eq!(unformatted, stripped, "Formatting should preserve content");
    assert_eq!(format::format_card_input(&formatted), formatted);
});
