//! Card brand classification by leading digits.
//!
//! Rules are evaluated in a fixed priority order and the first match wins.
//! A number shorter than a rule's prefix never matches that rule.

use crate::validate::normalize;
use crate::CardBrand;

/// Classifies normalized digits into a card brand.
///
/// | Priority | Brand | Prefix |
/// |----------|-------|--------|
/// | 1 | Visa | 4 |
/// | 2 | Mastercard | 51-55 |
/// | 3 | American Express | 34, 37 |
/// | 4 | Discover | 6011, 65 |
///
/// Anything else, including the empty sequence, is `CardBrand::Unknown`.
///
/// # Example
///
/// ```
/// use basai_pay::{classify, CardBrand};
///
/// assert_eq!(classify(&[4, 5, 3, 9]), CardBrand::Visa);
/// assert_eq!(classify(&[3, 7, 8, 2]), CardBrand::Amex);
/// assert_eq!(classify(&[]), CardBrand::Unknown);
/// ```
#[inline]
pub fn classify(digits: &[u8]) -> CardBrand {
    match digits {
        [4, ..] => CardBrand::Visa,
        [5, 1..=5, ..] => CardBrand::Mastercard,
        [3, 4, ..] | [3, 7, ..] => CardBrand::Amex,
        [6, 0, 1, 1, ..] | [6, 5, ..] => CardBrand::Discover,
        _ => CardBrand::Unknown,
    }
}

/// Normalizes raw input and classifies it.
///
/// Input that fails normalization classifies as `CardBrand::Unknown`, so
/// this can drive a brand icon on every keystroke without error handling.
///
/// # Example
///
/// ```
/// use basai_pay::{classify_str, CardBrand};
///
/// assert_eq!(classify_str("5105 1051"), CardBrand::Mastercard);
/// assert_eq!(classify_str("5105-1051"), CardBrand::Unknown);
/// ```
pub fn classify_str(raw: &str) -> CardBrand {
    normalize(raw)
        .map(|number| classify(number.digits()))
        .unwrap_or(CardBrand::Unknown)
}
