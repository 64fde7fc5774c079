//! Payment method selection and checkout rules.
//!
//! The payment page offers five methods. The selected method lives in a
//! [`PaymentState`] value that is replaced, never mutated in place, and
//! submission checks a [`PaymentForm`] snapshot against the rules for the
//! selected method. Rendering the result is left to the caller.
//!
//! # Example
//!
//! ```
//! use basai_pay::payment::{PaymentForm, PaymentMethod, PaymentState, CheckoutError};
//!
//! let state = PaymentState::default();
//! assert_eq!(state.button_label(), "Complete Payment");
//! assert_eq!(state.submit(&PaymentForm::default()), Err(CheckoutError::NoMethodSelected));
//!
//! let state = state.select(PaymentMethod::Card);
//! assert_eq!(state.button_label(), "Pay with Card");
//!
//! let form = PaymentForm::default()
//!     .with_card_number("4539 1488 0343 6467")
//!     .with_card_name("Sita Sharma")
//!     .with_expiry("12/29")
//!     .with_cvv("123");
//! assert_eq!(state.submit(&form), Ok(PaymentMethod::Card));
//! ```

use crate::mask::mask_string;
use crate::validate::check;
use std::fmt;
use std::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Text shown on the submit button before a method is chosen.
pub const DEFAULT_BUTTON_LABEL: &str = "Complete Payment";

/// Prefix of the booking reference shown after a successful payment.
pub const BOOKING_REFERENCE_PREFIX: &str = "#BSA";

/// Minimum number of digits in a CVV.
pub const CVV_MIN_DIGITS: usize = 3;

/// Payment methods offered on the payment page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PaymentMethod {
    /// eSewa mobile wallet.
    Esewa,
    /// Khalti mobile wallet.
    Khalti,
    /// Debit or credit card.
    Card,
    /// Bank transfer with an uploaded receipt.
    Bank,
    /// Cash on arrival.
    Cash,
}

impl PaymentMethod {
    /// All methods, in the order the page lists them.
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::Esewa,
        PaymentMethod::Khalti,
        PaymentMethod::Card,
        PaymentMethod::Bank,
        PaymentMethod::Cash,
    ];

    /// Returns the radio button value for this method.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Esewa => "esewa",
            Self::Khalti => "khalti",
            Self::Card => "card",
            Self::Bank => "bank",
            Self::Cash => "cash",
        }
    }

    /// Returns the submit button text for this method.
    #[inline]
    pub const fn button_label(&self) -> &'static str {
        match self {
            Self::Esewa => "Pay with eSewa",
            Self::Khalti => "Pay with Khalti",
            Self::Card => "Pay with Card",
            Self::Bank => "Upload Payment Proof",
            Self::Cash => "Confirm Booking",
        }
    }

    /// Returns the icon class shown on the submit button.
    #[inline]
    pub const fn icon_class(&self) -> &'static str {
        match self {
            Self::Esewa => "fa-wallet",
            Self::Khalti => "fa-mobile-alt",
            Self::Card => "fa-credit-card",
            Self::Bank => "fa-university",
            Self::Cash => "fa-money-bill-wave",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| CheckoutError::UnknownMethod(s.to_owned()))
    }
}

/// Reasons a checkout submission is refused.
///
/// `Display` yields the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// The value does not name a payment method.
    UnknownMethod(String),
    /// Submitted before choosing a method.
    NoMethodSelected,
    /// eSewa phone number is missing.
    MissingEsewaPhone,
    /// Khalti mobile number is missing.
    MissingKhaltiMobile,
    /// Khalti PIN is missing.
    MissingKhaltiPin,
    /// Card number is missing.
    MissingCardNumber,
    /// Card number has invalid characters or fails the Luhn checksum.
    InvalidCardNumber,
    /// Cardholder name is missing.
    MissingCardholderName,
    /// Expiry date is missing.
    MissingExpiry,
    /// CVV is missing, too short or not numeric.
    InvalidCvv,
    /// Bank transfer without an uploaded receipt.
    MissingReceipt,
}

impl fmt::Display for CheckoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMethod(value) => {
                write!(f, "unknown payment method '{}'", value.escape_default())
            }
            Self::NoMethodSelected => write!(f, "Please select a payment method"),
            Self::MissingEsewaPhone => write!(f, "Please enter your eSewa phone number"),
            Self::MissingKhaltiMobile => write!(f, "Please enter your Khalti mobile number"),
            Self::MissingKhaltiPin => write!(f, "Please enter your Khalti PIN"),
            Self::MissingCardNumber => write!(f, "Please enter card number"),
            Self::InvalidCardNumber => write!(f, "Invalid card number"),
            Self::MissingCardholderName => write!(f, "Please enter cardholder name"),
            Self::MissingExpiry => write!(f, "Please enter expiry date"),
            Self::InvalidCvv => write!(f, "Please enter valid CVV"),
            Self::MissingReceipt => write!(f, "Please upload payment receipt"),
        }
    }
}

impl std::error::Error for CheckoutError {}

/// An uploaded bank transfer receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptFile {
    /// File name as uploaded.
    pub name: String,
    /// File size in bytes.
    pub size_bytes: u64,
}

impl ReceiptFile {
    /// Creates a receipt description.
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Returns the size in kilobytes with two decimals, e.g. `"12.50 KB"`.
    pub fn size_label(&self) -> String {
        format!("{:.2} KB", self.size_bytes as f64 / 1024.0)
    }
}

/// Snapshot of the payment form fields.
///
/// A field that is `None`, empty or only whitespace counts as missing.
///
/// The text fields are wiped when the form is dropped, and `Debug` output
/// shows only the last four card digits. Because of the wipe the struct
/// implements `Drop`, so build partial forms with the `with_*` methods
/// rather than `..PaymentForm::default()`.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PaymentForm {
    /// eSewa phone number.
    pub esewa_phone: Option<String>,
    /// Khalti mobile number.
    pub khalti_mobile: Option<String>,
    /// Khalti PIN.
    pub khalti_pin: Option<String>,
    /// Card number as typed.
    pub card_number: Option<String>,
    /// Cardholder name.
    pub card_name: Option<String>,
    /// Expiry date as typed.
    pub expiry: Option<String>,
    /// Card verification value.
    pub cvv: Option<String>,
    /// Uploaded bank transfer receipt.
    #[zeroize(skip)]
    pub receipt: Option<ReceiptFile>,
}

impl PaymentForm {
    /// Sets the eSewa phone number.
    #[must_use]
    pub fn with_esewa_phone(mut self, value: impl Into<String>) -> Self {
        replace_field(&mut self.esewa_phone, value.into());
        self
    }

    /// Sets the Khalti mobile number.
    #[must_use]
    pub fn with_khalti_mobile(mut self, value: impl Into<String>) -> Self {
        replace_field(&mut self.khalti_mobile, value.into());
        self
    }

    /// Sets the Khalti PIN.
    #[must_use]
    pub fn with_khalti_pin(mut self, value: impl Into<String>) -> Self {
        replace_field(&mut self.khalti_pin, value.into());
        self
    }

    /// Sets the card number as typed.
    #[must_use]
    pub fn with_card_number(mut self, value: impl Into<String>) -> Self {
        replace_field(&mut self.card_number, value.into());
        self
    }

    /// Sets the cardholder name.
    #[must_use]
    pub fn with_card_name(mut self, value: impl Into<String>) -> Self {
        replace_field(&mut self.card_name, value.into());
        self
    }

    /// Sets the expiry date as typed.
    #[must_use]
    pub fn with_expiry(mut self, value: impl Into<String>) -> Self {
        replace_field(&mut self.expiry, value.into());
        self
    }

    /// Sets the card verification value.
    #[must_use]
    pub fn with_cvv(mut self, value: impl Into<String>) -> Self {
        replace_field(&mut self.cvv, value.into());
        self
    }

    /// Attaches a bank transfer receipt.
    #[must_use]
    pub fn with_receipt(mut self, receipt: ReceiptFile) -> Self {
        self.receipt = Some(receipt);
        self
    }
}

// The previous value is wiped, not just dropped.
fn replace_field(field: &mut Option<String>, value: String) {
    if let Some(mut old) = field.replace(value) {
        old.zeroize();
    }
}

fn redacted(field: &Option<String>) -> Option<&'static str> {
    field.as_ref().map(|_| "***")
}

impl fmt::Debug for PaymentForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentForm")
            .field("esewa_phone", &self.esewa_phone)
            .field("khalti_mobile", &self.khalti_mobile)
            .field("khalti_pin", &redacted(&self.khalti_pin))
            .field("card_number", &self.card_number.as_deref().map(mask_string))
            .field("card_name", &self.card_name)
            .field("expiry", &self.expiry)
            .field("cvv", &redacted(&self.cvv))
            .field("receipt", &self.receipt)
            .finish()
    }
}

/// Selection state of the payment page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaymentState {
    selected: Option<PaymentMethod>,
}

impl PaymentState {
    /// Returns the state with `method` selected.
    #[must_use]
    pub fn select(self, method: PaymentMethod) -> Self {
        Self {
            selected: Some(method),
        }
    }

    /// Returns the selected method, if any.
    #[inline]
    pub const fn selected(&self) -> Option<PaymentMethod> {
        self.selected
    }

    /// Returns the submit button text for the current selection.
    pub fn button_label(&self) -> &'static str {
        self.selected
            .map_or(DEFAULT_BUTTON_LABEL, |method| method.button_label())
    }

    /// Checks the form against the rules of the selected method.
    ///
    /// Returns the method that was accepted, or the first problem found.
    pub fn submit(&self, form: &PaymentForm) -> Result<PaymentMethod, CheckoutError> {
        let method = self.selected.ok_or(CheckoutError::NoMethodSelected)?;

        match method {
            PaymentMethod::Esewa => {
                require(&form.esewa_phone, CheckoutError::MissingEsewaPhone)?;
            }
            PaymentMethod::Khalti => {
                require(&form.khalti_mobile, CheckoutError::MissingKhaltiMobile)?;
                require(&form.khalti_pin, CheckoutError::MissingKhaltiPin)?;
            }
            PaymentMethod::Card => validate_card_fields(form)?,
            PaymentMethod::Bank => {
                if form.receipt.is_none() {
                    return Err(CheckoutError::MissingReceipt);
                }
            }
            PaymentMethod::Cash => {}
        }

        Ok(method)
    }
}

fn require<'a>(field: &'a Option<String>, error: CheckoutError) -> Result<&'a str, CheckoutError> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(error)
}

fn validate_card_fields(form: &PaymentForm) -> Result<(), CheckoutError> {
    let number = require(&form.card_number, CheckoutError::MissingCardNumber)?;
    let result = check(number).map_err(|_| CheckoutError::InvalidCardNumber)?;
    if !result.luhn_valid() {
        return Err(CheckoutError::InvalidCardNumber);
    }

    require(&form.card_name, CheckoutError::MissingCardholderName)?;
    require(&form.expiry, CheckoutError::MissingExpiry)?;

    let cvv = require(&form.cvv, CheckoutError::InvalidCvv)?;
    if cvv.len() < CVV_MIN_DIGITS || !cvv.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CheckoutError::InvalidCvv);
    }

    Ok(())
}

/// Builds the booking reference shown after a successful payment.
///
/// # Example
///
/// ```
/// use basai_pay::payment::booking_reference;
///
/// assert_eq!(booking_reference(1_700_000_000_000), "#BSA1700000000000");
/// ```
pub fn booking_reference(timestamp_ms: u64) -> String {
    format!("{}{}", BOOKING_REFERENCE_PREFIX, timestamp_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_form() -> PaymentForm {
        PaymentForm::default()
            .with_card_number("4539 1488 0343 6467")
            .with_card_name("Sita Sharma")
            .with_expiry("12/29")
            .with_cvv("123")
    }

    #[test]
    fn test_method_parse_round_trip() {
        for method in PaymentMethod::ALL {
            assert_eq!(method.as_str().parse::<PaymentMethod>(), Ok(method));
        }
        assert_eq!(
            "paypal".parse::<PaymentMethod>(),
            Err(CheckoutError::UnknownMethod("paypal".into()))
        );
        // Radio values are lowercase
        assert!("Card".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_button_labels_and_icons() {
        assert_eq!(PaymentMethod::Esewa.button_label(), "Pay with eSewa");
        assert_eq!(PaymentMethod::Bank.button_label(), "Upload Payment Proof");
        assert_eq!(PaymentMethod::Cash.button_label(), "Confirm Booking");
        assert_eq!(PaymentMethod::Khalti.icon_class(), "fa-mobile-alt");
        assert_eq!(PaymentMethod::Cash.icon_class(), "fa-money-bill-wave");
    }

    #[test]
    fn test_select_replaces_state() {
        let state = PaymentState::default();
        assert_eq!(state.selected(), None);
        assert_eq!(state.button_label(), DEFAULT_BUTTON_LABEL);

        let state = state.select(PaymentMethod::Esewa).select(PaymentMethod::Cash);
        assert_eq!(state.selected(), Some(PaymentMethod::Cash));
        assert_eq!(state.button_label(), "Confirm Booking");
    }

    #[test]
    fn test_submit_without_method() {
        let state = PaymentState::default();
        assert_eq!(
            state.submit(&card_form()),
            Err(CheckoutError::NoMethodSelected)
        );
    }

    #[test]
    fn test_submit_esewa() {
        let state = PaymentState::default().select(PaymentMethod::Esewa);
        assert_eq!(
            state.submit(&PaymentForm::default()),
            Err(CheckoutError::MissingEsewaPhone)
        );

        let form = PaymentForm::default().with_esewa_phone("9800000000");
        assert_eq!(state.submit(&form), Ok(PaymentMethod::Esewa));
    }

    #[test]
    fn test_submit_khalti_checks_mobile_before_pin() {
        let state = PaymentState::default().select(PaymentMethod::Khalti);
        let mut form = PaymentForm::default().with_khalti_pin("1234");
        assert_eq!(state.submit(&form), Err(CheckoutError::MissingKhaltiMobile));

        form.khalti_mobile = Some("9811111111".into());
        form.khalti_pin = Some("  ".into());
        assert_eq!(state.submit(&form), Err(CheckoutError::MissingKhaltiPin));

        form.khalti_pin = Some("1234".into());
        assert_eq!(state.submit(&form), Ok(PaymentMethod::Khalti));
    }

    #[test]
    fn test_submit_card_accepts_valid_form() {
        let state = PaymentState::default().select(PaymentMethod::Card);
        assert_eq!(state.submit(&card_form()), Ok(PaymentMethod::Card));
    }

    #[test]
    fn test_submit_card_rules_in_order() {
        let state = PaymentState::default().select(PaymentMethod::Card);

        let mut form = card_form();
        form.card_number = None;
        assert_eq!(state.submit(&form), Err(CheckoutError::MissingCardNumber));

        let mut form = card_form().with_card_number("4539 1488 0343 6468");
        form.card_name = None;
        assert_eq!(state.submit(&form), Err(CheckoutError::InvalidCardNumber));

        let form = card_form().with_card_number("4539-1488-0343-6467");
        assert_eq!(state.submit(&form), Err(CheckoutError::InvalidCardNumber));

        let form = card_form().with_card_name("");
        assert_eq!(
            state.submit(&form),
            Err(CheckoutError::MissingCardholderName)
        );

        let mut form = card_form();
        form.expiry = None;
        assert_eq!(state.submit(&form), Err(CheckoutError::MissingExpiry));
    }

    #[test]
    fn test_submit_card_cvv() {
        let state = PaymentState::default().select(PaymentMethod::Card);
        for cvv in [None, Some(""), Some("12"), Some("1a3")] {
            let mut form = card_form();
            form.cvv = cvv.map(String::from);
            assert_eq!(state.submit(&form), Err(CheckoutError::InvalidCvv), "{:?}", cvv);
        }
    }

    #[test]
    fn test_submit_card_does_not_require_known_brand() {
        // Diners Club passes the checksum; the page accepts it
        let state = PaymentState::default().select(PaymentMethod::Card);
        let form = card_form().with_card_number("3056 9309 0259 04");
        assert_eq!(state.submit(&form), Ok(PaymentMethod::Card));
    }

    #[test]
    fn test_submit_bank_and_cash() {
        let bank = PaymentState::default().select(PaymentMethod::Bank);
        assert_eq!(
            bank.submit(&PaymentForm::default()),
            Err(CheckoutError::MissingReceipt)
        );

        let form = PaymentForm::default().with_receipt(ReceiptFile::new("receipt.png", 2048));
        assert_eq!(bank.submit(&form), Ok(PaymentMethod::Bank));

        let cash = PaymentState::default().select(PaymentMethod::Cash);
        assert_eq!(cash.submit(&PaymentForm::default()), Ok(PaymentMethod::Cash));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CheckoutError::NoMethodSelected.to_string(),
            "Please select a payment method"
        );
        assert_eq!(
            CheckoutError::InvalidCardNumber.to_string(),
            "Invalid card number"
        );
        assert_eq!(
            CheckoutError::MissingReceipt.to_string(),
            "Please upload payment receipt"
        );
    }

    #[test]
    fn test_form_debug_hides_secrets() {
        let form = card_form().with_khalti_pin("9876");
        let debug = format!("{:?}", form);
        assert!(!debug.contains("4539 1488 0343 6467"));
        assert!(!debug.contains("4539148803436467"));
        assert!(debug.contains("****-****-****-6467"));
        assert!(!debug.contains("123"));
        assert!(!debug.contains("9876"));
        assert!(debug.contains("Sita Sharma"));
    }

    #[test]
    fn test_form_zeroize_clears_fields() {
        let mut form = card_form()
            .with_khalti_mobile("9811111111")
            .with_receipt(ReceiptFile::new("receipt.png", 2048));
        form.zeroize();
        assert_eq!(form.card_number, None);
        assert_eq!(form.cvv, None);
        assert_eq!(form.khalti_mobile, None);
        // The receipt holds no secrets and is kept
        assert!(form.receipt.is_some());
    }

    #[test]
    fn test_form_builder_replaces_value() {
        let form = card_form().with_cvv("456").with_cvv("789");
        assert_eq!(form.cvv.as_deref(), Some("789"));
    }

    #[test]
    fn test_receipt_size_label() {
        assert_eq!(ReceiptFile::new("a.png", 12_800).size_label(), "12.50 KB");
        assert_eq!(ReceiptFile::new("b.pdf", 0).size_label(), "0.00 KB");
    }

    #[test]
    fn test_booking_reference() {
        assert_eq!(booking_reference(42), "#BSA42");
    }

    #[test]
    fn test_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PaymentState>();
        assert_send_sync::<PaymentForm>();

        fn assert_zeroize_on_drop<T: ZeroizeOnDrop>() {}
        assert_zeroize_on_drop::<PaymentForm>();
        assert_send_sync::<CheckoutError>();
    }
}
