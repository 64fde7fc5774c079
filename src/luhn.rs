//! Luhn (modulus 10) checksum.
//!
//! Digits are processed from the rightmost position leftward. Every second
//! digit, starting with the second from the right, is doubled; doubled
//! values above 9 have 9 subtracted. The number is valid when the sum of
//! all digits is divisible by 10.

/// Doubled digit values with 9 already subtracted where needed.
/// Index is the digit (0-9).
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Checks a digit sequence against the Luhn checksum.
///
/// The empty sequence sums to 0 and therefore reports valid; callers that
/// must reject empty input have to do so themselves.
///
/// # Example
///
/// ```
/// use basai_pay::luhn::luhn_check;
///
/// let digits = [4, 5, 3, 9, 1, 4, 8, 8, 0, 3, 4, 3, 6, 4, 6, 7];
/// assert!(luhn_check(&digits));
///
/// let altered = [4, 5, 3, 9, 1, 4, 8, 8, 0, 3, 4, 3, 6, 4, 6, 8];
/// assert!(!luhn_check(&altered));
///
/// assert!(luhn_check(&[]));
/// ```
#[inline]
pub fn luhn_check(digits: &[u8]) -> bool {
    compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10).
///
/// Every value in `digits` must be in `0..=9`. Input length is unbounded,
/// so the sum is kept in a `u64`.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u64 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                DOUBLE_TABLE[d as usize] as u64
            } else {
                d as u64
            }
        })
        .sum()
}

/// Returns the check digit that makes `partial` followed by it Luhn-valid.
///
/// # Example
///
/// ```
/// use basai_pay::luhn::generate_check_digit;
///
/// let partial = [4, 5, 3, 9, 1, 4, 8, 8, 0, 3, 4, 3, 6, 4, 6];
/// assert_eq!(generate_check_digit(&partial), 7);
/// ```
pub fn generate_check_digit(partial: &[u8]) -> u8 {
    // Once the check digit is appended every existing digit moves one
    // position left, so the doubling parity flips.
    let sum: u64 = partial
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 0 {
                DOUBLE_TABLE[d as usize] as u64
            } else {
                d as u64
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}
