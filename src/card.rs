//! Core card types.
//!
//! This module provides the `CardBrand` enum for the card networks the
//! payment page recognises, the `CardNumber` holder for normalized digits,
//! and the `CardCheck` result combining brand and checksum.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Card brands recognised by the payment page.
///
/// `Unknown` is a regular outcome, not an error: numbers that match none of
/// the prefix rules (including the empty number) classify as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardBrand {
    /// Visa - Prefix 4
    Visa,
    /// Mastercard - Prefix 51-55
    Mastercard,
    /// American Express - Prefix 34, 37
    Amex,
    /// Discover - Prefix 6011, 65
    Discover,
    /// No prefix rule matched.
    Unknown,
}

impl CardBrand {
    /// All known brands, in classification priority order.
    pub const KNOWN: [CardBrand; 4] = [
        CardBrand::Visa,
        CardBrand::Mastercard,
        CardBrand::Amex,
        CardBrand::Discover,
    ];

    /// Returns a human-readable name for the card brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns the lowercase identifier used in icon classes and JSON.
    #[inline]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Discover => "discover",
            Self::Unknown => "unknown",
        }
    }

    /// Returns true for every brand except `Unknown`.
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A normalized card number: decimal digits only, stored as values 0-9.
///
/// The length is not bounded here; the empty number is representable.
/// Digits are wiped when the value is dropped, and `Debug`/`Display` only
/// ever show the masked form.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct CardNumber {
    digits: Vec<u8>,
}

impl CardNumber {
    /// Creates a card number from digit values.
    ///
    /// Callers must guarantee every value is in `0..=9`; use
    /// [`crate::normalize`] for user input.
    #[inline]
    pub(crate) fn from_digits(digits: Vec<u8>) -> Self {
        debug_assert!(digits.iter().all(|&d| d <= 9));
        Self { digits }
    }

    /// Returns the digit values.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Returns the number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns true if no digits remained after normalization.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns the last four digits (or fewer, for short numbers).
    pub fn last_four(&self) -> String {
        let start = self.digits.len().saturating_sub(4);
        digits_to_string(&self.digits[start..])
    }

    /// Returns the full card number as a string.
    ///
    /// # Security Warning
    ///
    /// This exposes the full card number. Never log the result; use
    /// `masked()` for display.
    pub fn number(&self) -> String {
        digits_to_string(&self.digits)
    }

    /// Returns the number with all but the last four digits masked.
    #[inline]
    pub fn masked(&self) -> String {
        crate::mask::mask_digits(&self.digits)
    }

    /// Classifies the brand of this number.
    #[inline]
    pub fn brand(&self) -> CardBrand {
        crate::detect::classify(&self.digits)
    }

    /// Returns true if this number satisfies the Luhn checksum.
    #[inline]
    pub fn passes_luhn(&self) -> bool {
        crate::luhn::luhn_check(&self.digits)
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardNumber")
            .field("number", &self.masked())
            .field("length", &self.digits.len())
            .finish()
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

/// The outcome of checking a card number.
///
/// Brand and checksum are derived independently from the same digits: a
/// number can carry a known brand and still fail the checksum, and the
/// other way round. Use [`CardCheck::is_acceptable`] to require both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CardCheck {
    brand: CardBrand,
    luhn_valid: bool,
    length: usize,
}

impl CardCheck {
    #[inline]
    pub(crate) const fn new(brand: CardBrand, luhn_valid: bool, length: usize) -> Self {
        Self {
            brand,
            luhn_valid,
            length,
        }
    }

    /// Returns the classified brand.
    #[inline]
    pub const fn brand(&self) -> CardBrand {
        self.brand
    }

    /// Returns the Luhn checksum outcome.
    #[inline]
    pub const fn luhn_valid(&self) -> bool {
        self.luhn_valid
    }

    /// Returns the number of digits after normalization.
    #[inline]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Returns true when the number is non-empty, has a known brand and
    /// passes the checksum.
    #[inline]
    pub const fn is_acceptable(&self) -> bool {
        self.length > 0 && self.brand.is_known() && self.luhn_valid
    }
}

pub(crate) fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| (b'0' + d) as char).collect()
}
