//! Live formatting for the payment form's input fields.
//!
//! These functions take whatever the user has typed so far and return the
//! text the field should show. They never fail: rejecting bad card input is
//! the job of [`crate::normalize`].
//!
//! # Example
//!
//! ```
//! use basai_pay::format::{format_card_input, format_expiry_input, sanitize_cvv_input};
//!
//! assert_eq!(format_card_input("4539148803436467"), "4539 1488 0343 6467");
//! assert_eq!(format_expiry_input("1228"), "12/28");
//! assert_eq!(sanitize_cvv_input("12a34"), "123");
//! ```

use crate::validate::is_input_whitespace;
use crate::CardBrand;

/// Maximum number of CVV digits the form accepts.
pub const CVV_MAX_DIGITS: usize = 3;

/// Regroups card number input into blocks of four separated by spaces.
///
/// Whitespace is removed first; every other character is kept as typed,
/// so `"41a11"` becomes `"41a1 1"`.
///
/// # Example
///
/// ```
/// use basai_pay::format::format_card_input;
///
/// assert_eq!(format_card_input("4111"), "4111");
/// assert_eq!(format_card_input("41111"), "4111 1");
/// assert_eq!(format_card_input("4111 11 11"), "4111 1111");
/// ```
pub fn format_card_input(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len() + raw.len() / 4);

    for (i, c) in raw.chars().filter(|&c| !is_input_whitespace(c)).enumerate() {
        if i > 0 && i % 4 == 0 {
            result.push(' ');
        }
        result.push(c);
    }

    result
}

/// Formats expiry input as `MM/YY` while it is being typed.
///
/// Non-digits are dropped. Once two digits are present a slash follows
/// them, then at most two more digits; anything beyond is discarded.
///
/// # Example
///
/// ```
/// use basai_pay::format::format_expiry_input;
///
/// assert_eq!(format_expiry_input("1"), "1");
/// assert_eq!(format_expiry_input("12"), "12/");
/// assert_eq!(format_expiry_input("12/2"), "12/2");
/// assert_eq!(format_expiry_input("122830"), "12/28");
/// ```
pub fn format_expiry_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() < 2 {
        return digits;
    }

    let (month, rest) = digits.split_at(2);
    let year = &rest[..rest.len().min(2)];
    format!("{}/{}", month, year)
}

/// Keeps only the digits of CVV input, truncated to three.
///
/// # Example
///
/// ```
/// use basai_pay::format::sanitize_cvv_input;
///
/// assert_eq!(sanitize_cvv_input("1234"), "123");
/// assert_eq!(sanitize_cvv_input(" 4 5"), "45");
/// ```
pub fn sanitize_cvv_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(CVV_MAX_DIGITS)
        .collect()
}

/// Returns the icon class shown next to the card number field.
///
/// `None` means the icon is hidden.
///
/// # Example
///
/// ```
/// use basai_pay::format::card_icon_class;
/// use basai_pay::CardBrand;
///
/// assert_eq!(card_icon_class(CardBrand::Amex).as_deref(), Some("fab fa-cc-amex"));
/// assert_eq!(card_icon_class(CardBrand::Unknown), None);
/// ```
pub fn card_icon_class(brand: CardBrand) -> Option<String> {
    brand
        .is_known()
        .then(|| format!("fab fa-cc-{}", brand.slug()))
}
