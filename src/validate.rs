//! Card number normalization and the combined check.
//!
//! `normalize` turns user input into a [`CardNumber`]; `check` normalizes
//! once and derives both the brand and the checksum from the same digits.

use crate::card::{CardCheck, CardNumber};
use crate::detect::classify;
use crate::error::ValidationError;
use crate::luhn;

/// Returns true for the whitespace characters stripped from card input.
///
/// This is the browser's `\s` set: Unicode `White_Space` without U+0085
/// (NEXT LINE), plus U+FEFF (BYTE ORDER MARK).
///
/// # Example
///
/// ```
/// use basai_pay::validate::is_input_whitespace;
///
/// assert!(is_input_whitespace('\u{a0}'));
/// assert!(is_input_whitespace('\u{feff}'));
/// assert!(!is_input_whitespace('\u{85}'));
/// ```
#[inline]
pub fn is_input_whitespace(c: char) -> bool {
    match c {
        '\u{feff}' => true,
        '\u{85}' => false,
        c => c.is_whitespace(),
    }
}

/// Normalizes a raw card number.
///
/// All whitespace (see [`is_input_whitespace`]) is removed. Any other character that is not an ASCII
/// decimal digit is rejected, including separators such as `-`. The result
/// may be empty and its length is not bounded; length limits belong to the
/// caller.
///
/// # Example
///
/// ```
/// use basai_pay::{normalize, ValidationError};
///
/// let number = normalize("4539 1488 0343 6467").unwrap();
/// assert_eq!(number.len(), 16);
///
/// let err = normalize("12a3").unwrap_err();
/// assert_eq!(err, ValidationError::InvalidInput { position: 2, character: 'a' });
/// ```
pub fn normalize(raw: &str) -> Result<CardNumber, ValidationError> {
    let mut digits = Vec::with_capacity(raw.len());

    for (position, c) in raw.chars().enumerate() {
        match c {
            '0'..='9' => digits.push(c as u8 - b'0'),
            c if is_input_whitespace(c) => {}
            character => {
                return Err(ValidationError::InvalidInput {
                    position,
                    character,
                });
            }
        }
    }

    Ok(CardNumber::from_digits(digits))
}

/// Normalizes a raw card number and reports its brand and checksum.
///
/// Brand and checksum are independent: inspect both, or use
/// [`CardCheck::is_acceptable`].
///
/// # Example
///
/// ```
/// use basai_pay::{check, CardBrand};
///
/// let result = check("4539 1488 0343 6467").unwrap();
/// assert_eq!(result.brand(), CardBrand::Visa);
/// assert!(result.luhn_valid());
///
/// // Known brand, bad checksum
/// let result = check("4539 1488 0343 6468").unwrap();
/// assert_eq!(result.brand(), CardBrand::Visa);
/// assert!(!result.luhn_valid());
/// ```
pub fn check(raw: &str) -> Result<CardCheck, ValidationError> {
    let number = normalize(raw)?;
    Ok(check_number(&number))
}

/// Checks an already normalized card number.
#[inline]
pub fn check_number(number: &CardNumber) -> CardCheck {
    let digits = number.digits();
    CardCheck::new(classify(digits), luhn::luhn_check(digits), digits.len())
}

/// Returns true if the input normalizes and passes the Luhn checksum.
///
/// The brand is not considered. Empty input passes, as the checksum of no
/// digits is 0.
///
/// # Example
///
/// ```
/// use basai_pay::passes_luhn;
///
/// assert!(passes_luhn("4539 1488 0343 6467"));
/// assert!(!passes_luhn("4539 1488 0343 6468"));
/// assert!(!passes_luhn("4539-1488-0343-6467"));
/// ```
#[inline]
pub fn passes_luhn(raw: &str) -> bool {
    normalize(raw).is_ok_and(|number| number.passes_luhn())
}

/// Returns true if the input is non-empty, has a known brand and passes
/// the checksum.
///
/// # Example
///
/// ```
/// use basai_pay::is_valid;
///
/// assert!(is_valid("4539148803436467"));
/// assert!(!is_valid(""));
/// assert!(!is_valid("0000000000000000"));
/// ```
#[inline]
pub fn is_valid(raw: &str) -> bool {
    check(raw).is_ok_and(|result| result.is_acceptable())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardBrand;

    const VISA_VALID: &str = "4539148803436467";
    const VISA_VALID_SPACES: &str = "4539 1488 0343 6467";
    const MASTERCARD_VALID: &str = "5500000000000004";
    const AMEX_VALID: &str = "378282246310005";
    const DISCOVER_VALID: &str = "6011111111111117";

    #[test]
    fn test_normalize_strips_whitespace() {
        let number = normalize(VISA_VALID_SPACES).unwrap();
        assert_eq!(number.len(), 16);
        assert_eq!(number.number(), VISA_VALID);

        let number = normalize("\t4539\n1488  0343\u{a0}6467 ").unwrap();
        assert_eq!(number.number(), VISA_VALID);
    }

    #[test]
    fn test_normalize_whitespace_set() {
        let number = normalize("\u{feff}4539 1488 0343 6467").unwrap();
        assert_eq!(number.len(), 16);
        assert_eq!(number.number(), VISA_VALID);

        let err = normalize("4539\u{85}148803436467").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidInput {
                position: 4,
                character: '\u{85}'
            }
        );
    }

    #[test]
    fn test_normalize_rejects_hyphen() {
        let err = normalize("4111-1111 1111 1111").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidInput {
                position: 4,
                character: '-'
            }
        );
    }

    #[test]
    fn test_normalize_rejects_letter() {
        let err = normalize("12a3").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidInput {
                position: 2,
                character: 'a'
            }
        );
    }

    #[test]
    fn test_normalize_rejects_non_ascii_digits() {
        // Arabic-Indic digit one
        let err = normalize("4\u{661}").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidInput { position: 1, .. }
        ));
    }

    #[test]
    fn test_normalize_position_counts_characters() {
        let err = normalize("é4x").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidInput {
                position: 0,
                character: 'é'
            }
        );
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize("").unwrap().is_empty());
        assert!(normalize("    ").unwrap().is_empty());
    }

    #[test]
    fn test_normalize_unbounded_length() {
        let long = "4".repeat(64);
        assert_eq!(normalize(&long).unwrap().len(), 64);
    }

    #[test]
    fn test_check_known_brands() {
        let cases = [
            (VISA_VALID, CardBrand::Visa),
            (MASTERCARD_VALID, CardBrand::Mastercard),
            (AMEX_VALID, CardBrand::Amex),
            (DISCOVER_VALID, CardBrand::Discover),
        ];
        for (input, brand) in cases {
            let result = check(input).unwrap();
            assert_eq!(result.brand(), brand, "{}", input);
            assert!(result.luhn_valid(), "{}", input);
            assert!(result.is_acceptable(), "{}", input);
        }
    }

    #[test]
    fn test_check_unknown_brand_valid_checksum() {
        // Diners Club test number: checksum passes, brand not recognised
        let result = check("30569309025904").unwrap();
        assert_eq!(result.brand(), CardBrand::Unknown);
        assert!(result.luhn_valid());
        assert!(!result.is_acceptable());
    }

    #[test]
    fn test_check_empty() {
        let result = check("").unwrap();
        assert_eq!(result.brand(), CardBrand::Unknown);
        assert!(result.luhn_valid());
        assert_eq!(result.length(), 0);
        assert!(!result.is_acceptable());
    }

    #[test]
    fn test_check_propagates_error() {
        assert!(check("4111-1111").is_err());
    }

    #[test]
    fn test_passes_luhn() {
        assert!(passes_luhn(VISA_VALID));
        assert!(passes_luhn(""));
        assert!(!passes_luhn("4539148803436468"));
        assert!(!passes_luhn("12a3"));
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid(VISA_VALID_SPACES));
        assert!(is_valid(AMEX_VALID));
        assert!(!is_valid("4539148803436468"));
        assert!(!is_valid(""));
        assert!(!is_valid("4539-1488-0343-6467"));
    }
}
