//! Order summary shown beside the payment form.
//!
//! The booking page hands the order over to the payment page through the
//! query string (`?hostel=...&duration=...&price=...`). Missing values fall
//! back to the page defaults.

use serde::Serialize;

/// Hostel shown when the query string names none.
pub const DEFAULT_HOSTEL: &str = "Thamel Student House";
/// Stay duration shown when the query string names none.
pub const DEFAULT_DURATION: &str = "6 Months";
/// Price shown when the query string names none.
pub const DEFAULT_PRICE: &str = "90,000";

/// Currency prefix for displayed prices.
pub const CURRENCY: &str = "NPR";

/// The order being paid for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    /// Hostel name.
    pub hostel: String,
    /// Stay duration, as displayed.
    pub duration: String,
    /// Price, as displayed (may contain thousands separators).
    pub price: String,
}

impl Default for OrderSummary {
    fn default() -> Self {
        Self {
            hostel: DEFAULT_HOSTEL.to_owned(),
            duration: DEFAULT_DURATION.to_owned(),
            price: DEFAULT_PRICE.to_owned(),
        }
    }
}

impl OrderSummary {
    /// Reads the order from a query string.
    ///
    /// A leading `?` is ignored, as are keys other than `hostel`,
    /// `duration` and `price`. When a key repeats, its first value wins;
    /// an empty first value counts as missing.
    ///
    /// # Example
    ///
    /// ```
    /// use basai_pay::order::OrderSummary;
    ///
    /// let order = OrderSummary::from_query("?hostel=Patan%20Hostel&price=45%2C000&room=2");
    /// assert_eq!(order.hostel, "Patan Hostel");
    /// assert_eq!(order.duration, "6 Months");
    /// assert_eq!(order.price_label(), "NPR 45,000");
    /// ```
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        // Decoding into string pairs cannot fail: malformed escapes are kept as-is.
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap_or_default();

        Self {
            hostel: first_or_default(&pairs, "hostel", DEFAULT_HOSTEL),
            duration: first_or_default(&pairs, "duration", DEFAULT_DURATION),
            price: first_or_default(&pairs, "price", DEFAULT_PRICE),
        }
    }

    /// Returns the price with its currency, e.g. `"NPR 90,000"`.
    pub fn price_label(&self) -> String {
        format!("{} {}", CURRENCY, self.price)
    }
}

fn first_or_default(pairs: &[(String, String)], key: &str, default: &str) -> String {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_owned()
}
