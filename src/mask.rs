//! Masking for card numbers shown on screen or written to logs.
//!
//! Only the last four digits are ever revealed.

use crate::card::digits_to_string;

/// Masks digit values, keeping only the last four visible.
///
/// Masked positions are grouped by four with `-`, matching the layout of a
/// printed card: `****-****-****-1234`. Numbers of four digits or fewer
/// are returned unmasked.
///
/// # Example
///
/// ```
/// use basai_pay::mask::mask_digits;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(mask_digits(&digits), "****-****-****-1111");
/// ```
pub fn mask_digits(digits: &[u8]) -> String {
    let len = digits.len();
    let masked_count = len.saturating_sub(4);

    let mut result = String::with_capacity(len + len / 4);
    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }

    if masked_count > 0 {
        result.push('-');
    }

    result.push_str(&digits_to_string(&digits[masked_count..]));
    result
}

/// Masks a raw card number string.
///
/// Non-digit characters are dropped before masking. Useful for logging
/// input that failed normalization.
pub fn mask_string(input: &str) -> String {
    let digits: Vec<u8> = input
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect();
    mask_digits(&digits)
}
