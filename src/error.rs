//! Error types for card number checks.
//!
//! Only malformed input is an error. An unrecognised brand or a failed
//! checksum are ordinary outcomes reported through [`crate::CardCheck`].

use std::fmt;

/// Errors that can occur while normalizing a card number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A character other than whitespace or a decimal digit was found.
    ///
    /// Only whitespace is stripped during normalization, so separators
    /// such as hyphens or dots are rejected too.
    InvalidInput {
        /// The position in the input string (0-indexed, in characters).
        position: usize,
        /// The offending character.
        character: char,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput {
                position,
                character,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {} (only digits and spaces allowed)",
                    character.escape_default(),
                    position
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::InvalidInput {
                position: 4,
                character: '-'
            }
            .to_string(),
            "invalid character '-' at position 4 (only digits and spaces allowed)"
        );

        // Control characters are escaped
        assert_eq!(
            ValidationError::InvalidInput {
                position: 0,
                character: '\u{0}'
            }
            .to_string(),
            "invalid character '\\u{0}' at position 0 (only digits and spaces allowed)"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationError>();
    }
}
