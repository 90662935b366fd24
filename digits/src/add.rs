//! Carry-propagating addition of decimal strings.

use crate::decimal::DecimalString;
use crate::digit::{add_digit, DigitSum};
use crate::overflow::will_overflow;
use crate::Result;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Sum of two decimal strings.
///
/// The result is `max(a.len(), b.len())` digits wide, or one wider when the
/// most significant column carries. Operands are never modified.
///
/// Widths come from the operands as written. The result has no leading zero
/// only if both operands are canonical: `"00" + "0"` is `"00"`, while
/// `"0" + "0"` is `"0"`.
///
/// # Examples
///
/// ```
/// use digits::{add, dec};
///
/// assert_eq!(add(&dec!("99"), &dec!("1")), "100");
/// assert_eq!(add(&dec!("89"), &dec!("10")), "99");
/// ```
pub fn add(a: &DecimalString, b: &DecimalString) -> DecimalString {
    let overflow = will_overflow(a, b);
    let columns = a.len().max(b.len());
    let width = columns + overflow as usize;

    // Least significant digit first; reversed once at the end.
    let mut lsb_first = Vec::with_capacity(width);
    let mut carry = false;
    for i in 0..columns {
        let DigitSum {
            carry: carry_out,
            digit,
        } = add_digit(a.digit_at(i), b.digit_at(i)).with_carry(carry);
        lsb_first.push(digit.as_ascii());
        carry = carry_out;
    }
    if carry {
        lsb_first.push(b'1');
    }

    debug_assert_eq!(carry, overflow);
    debug_assert_eq!(lsb_first.len(), width);
    tracing::trace!(
        lhs_width = a.len(),
        rhs_width = b.len(),
        overflow,
        width,
        "added decimal strings"
    );

    lsb_first.reverse();
    DecimalString::from_ascii_unchecked(lsb_first)
}

/// Adds two digit strings, validating both before any digit is added.
///
/// # Examples
///
/// ```
/// use digits::{add_str, Error};
///
/// assert_eq!(add_str("999999999", "1"), Ok("1000000000".to_string()));
/// assert_eq!(add_str("", "5"), Err(Error::EmptyOperand));
/// ```
pub fn add_str(a: &str, b: &str) -> Result<String> {
    let a: DecimalString = a.parse()?;
    let b: DecimalString = b.parse()?;
    Ok(add(&a, &b).into())
}

impl<'a, 'b> Add<&'b DecimalString> for &'a DecimalString {
    type Output = DecimalString;
    fn add(self, other: &'b DecimalString) -> Self::Output {
        add(self, other)
    }
}

impl Add<&DecimalString> for DecimalString {
    type Output = DecimalString;
    fn add(self, other: &DecimalString) -> Self::Output {
        add(&self, other)
    }
}

impl Add<DecimalString> for &DecimalString {
    type Output = DecimalString;
    fn add(self, other: DecimalString) -> Self::Output {
        add(self, &other)
    }
}

impl Add for DecimalString {
    type Output = DecimalString;
    fn add(self, other: DecimalString) -> Self::Output {
        add(&self, &other)
    }
}

impl AddAssign<&DecimalString> for DecimalString {
    fn add_assign(&mut self, other: &DecimalString) {
        *self = add(self, other);
    }
}

impl AddAssign for DecimalString {
    fn add_assign(&mut self, other: DecimalString) {
        *self = add(self, &other);
    }
}

impl Sum for DecimalString {
    fn sum<I: Iterator<Item = DecimalString>>(iter: I) -> Self {
        iter.fold(DecimalString::zero(), |acc, n| acc + n)
    }
}

impl<'a> Sum<&'a DecimalString> for DecimalString {
    fn sum<I: Iterator<Item = &'a DecimalString>>(iter: I) -> Self {
        iter.fold(DecimalString::zero(), |acc, n| acc + n)
    }
}
