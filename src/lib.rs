//! # basai_pay
//!
//! Payment card checks and checkout rules for the Basai student
//! accommodation booking site.
//!
//! ## Features
//!
//! - Card number normalization (whitespace only)
//! - Card brand classification (Visa, Mastercard, American Express, Discover)
//! - Luhn checksum validation
//! - Live formatting for card, expiry and CVV fields
//! - Payment method selection and checkout rules
//! - Order summary from the payment page query string
//!
//! ## Quick Start
//!
//! ```rust
//! use basai_pay::{check, normalize, CardBrand};
//!
//! let result = check("4539 1488 0343 6467").unwrap();
//! assert_eq!(result.brand(), CardBrand::Visa);
//! assert!(result.luhn_valid());
//!
//! // Brand and checksum are independent
//! let result = check("4539 1488 0343 6468").unwrap();
//! assert_eq!(result.brand(), CardBrand::Visa);
//! assert!(!result.luhn_valid());
//!
//! // Only whitespace is stripped
//! assert!(normalize("4111-1111-1111-1111").is_err());
//! ```
//!
//! ## Checkout
//!
//! ```rust
//! use basai_pay::payment::{PaymentForm, PaymentMethod, PaymentState, CheckoutError};
//!
//! let state = PaymentState::default().select(PaymentMethod::Khalti);
//! let form = PaymentForm::default().with_khalti_mobile("9811111111");
//! assert_eq!(state.submit(&form), Err(CheckoutError::MissingKhaltiPin));
//! ```
//!
//! ## Supported Card Brands
//!
//! Rules are tried top to bottom; the first match wins.
//!
//! | Brand | Prefix |
//! |-------|--------|
//! | Visa | 4 |
//! | Mastercard | 51-55 |
//! | American Express | 34, 37 |
//! | Discover | 6011, 65 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize` for brands, results and payment methods |
//! | `query` | Order summary from the query string (default) |
//! | `cli` | Command-line tool |
//!
//! ## Security
//!
//! - Card digits are wiped from memory when a `CardNumber` is dropped
//! - `Debug` and `Display` show masked numbers only
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod detect;
pub mod error;
pub mod format;
pub mod luhn;
pub mod mask;
#[cfg(feature = "query")]
pub mod order;
pub mod payment;
pub mod validate;

// Re-export main types at crate root
pub use card::{CardBrand, CardCheck, CardNumber};
pub use detect::{classify, classify_str};
pub use error::ValidationError;
pub use luhn::luhn_check;
pub use validate::{check, check_number, is_valid, normalize, passes_luhn};
