//! Result-width pre-scan.

use crate::decimal::DecimalString;
use crate::digit::add_digit;

/// Whether `a + b` carries out of its most significant position, i.e. needs
/// one digit more than the wider operand.
///
/// Walks both operands least significant digit first, zero-extending the
/// narrower one, and tracks only the carry.
///
/// # Examples
///
/// ```
/// use digits::{dec, will_overflow};
///
/// assert!(!will_overflow(&dec!("89"), &dec!("10")));
/// assert!(will_overflow(&dec!("89"), &dec!("11")));
/// ```
pub fn will_overflow(a: &DecimalString, b: &DecimalString) -> bool {
    let mut overflow = false;
    for i in 0..a.len().max(b.len()) {
        let r1 = add_digit(a.digit_at(i), b.digit_at(i));
        if r1.carry {
            // The column carries regardless of the incoming carry.
            overflow = true;
            continue;
        }
        if overflow {
            overflow = r1.with_carry(true).carry;
        }
    }
    overflow
}

/// Exact number of digits in `a + b`.
pub fn result_width(a: &DecimalString, b: &DecimalString) -> usize {
    a.len().max(b.len()) + will_overflow(a, b) as usize
}
