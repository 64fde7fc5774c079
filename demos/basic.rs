//! Basic card number checks.
//!
//! Run with: `cargo run --example basic`

use basai_pay::format::{card_icon_class, format_card_input};
use basai_pay::{check, normalize, CardBrand};

fn main() {
    println!("=== Card Number Checks ===\n");

    // Example 1: Check a Visa card typed with spaces
    let input = "4539 1488 0343 6467";
    println!("Checking: {}", input);

    match check(input) {
        Ok(result) => {
            println!("  Brand: {}", result.brand().name());
            println!("  Luhn: {}", if result.luhn_valid() { "PASS" } else { "FAIL" });
            println!("  Acceptable: {}", result.is_acceptable());
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    // Example 2: Brand and checksum are independent
    let cases = [
        ("4111111111111111", "Visa"),
        ("5500000000000004", "Mastercard"),
        ("378282246310005", "Amex"),
        ("6011111111111117", "Discover"),
        ("4111111111111112", "Visa prefix, bad checksum"),
        ("30569309025904", "Valid checksum, unrecognised brand"),
    ];

    println!("Brand / checksum:");
    for (number, description) in cases {
        if let Ok(result) = check(number) {
            println!(
                "  {:<20} {:<36} brand={:<16} luhn={}",
                format_card_input(number),
                description,
                result.brand().name(),
                result.luhn_valid()
            );
        }
    }
    println!();

    // Example 3: Normalization errors
    println!("Rejected input:");
    for input in ["4111-1111-1111-1111", "12a3", "4111.1111"] {
        match normalize(input) {
            Ok(number) => println!("  {:?} -> {}", input, number),
            Err(e) => println!("  {:?} -> {}", input, e),
        }
    }
    println!();

    // Example 4: Brand icon as the user types
    println!("Brand icon while typing:");
    let mut field = String::new();
    for c in "378282246310005".chars() {
        field.push(c);
        field = format_card_input(&field);
        let brand = basai_pay::classify_str(&field);
        let icon = card_icon_class(brand).unwrap_or_else(|| "(hidden)".to_string());
        if brand != CardBrand::Unknown || field.len() < 3 {
            println!("  {:<20} {}", field, icon);
        }
    }
}
