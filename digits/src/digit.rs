//! Single decimal digits and the two-operand digit adder.

use crate::{Error, Result};
use std::convert::TryFrom;
use std::fmt;

/// One ASCII decimal digit, `'0'` through `'9'`.
///
/// # Examples
///
/// ```
/// use digits::Digit;
/// use std::convert::TryFrom;
///
/// let seven = Digit::try_from('7').unwrap();
/// assert_eq!(seven.value(), 7);
/// assert_eq!(char::from(seven), '7');
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(b'0');
    pub const ONE: Digit = Digit(b'1');

    /// Digit with numeric value `value`, if `value < 10`.
    pub const fn new(value: u8) -> Option<Self> {
        if value < 10 {
            Some(Digit(b'0' + value))
        } else {
            None
        }
    }

    /// Digit for an ASCII byte already known to be in `b'0'..=b'9'`.
    pub(crate) const fn from_ascii_unchecked(byte: u8) -> Self {
        debug_assert!(byte.is_ascii_digit());
        Digit(byte)
    }

    pub const fn value(self) -> u8 {
        self.0 - b'0'
    }

    pub const fn as_ascii(self) -> u8 {
        self.0
    }
}

/// A lone byte has no place in any operand, so a rejected byte is always
/// reported at position 0.
impl TryFrom<u8> for Digit {
    type Error = Error;
    fn try_from(byte: u8) -> Result<Self> {
        if byte.is_ascii_digit() {
            Ok(Digit(byte))
        } else {
            Err(Error::InvalidDigit {
                position: 0,
                found: char::from(byte),
            })
        }
    }
}

/// Like the byte conversion, a rejected `char` is reported at position 0.
impl TryFrom<char> for Digit {
    type Error = Error;
    fn try_from(c: char) -> Result<Self> {
        if c.is_ascii_digit() {
            Ok(Digit(c as u8))
        } else {
            Err(Error::InvalidDigit {
                position: 0,
                found: c,
            })
        }
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> Self {
        char::from(digit.0)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.value()
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/// Outcome of adding two digits: the digit written in this position and
/// whether a one carries into the next more significant position.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DigitSum {
    pub carry: bool,
    pub digit: Digit,
}

impl DigitSum {
    /// Folds an incoming carry into this sum.
    ///
    /// The carry is added with a second call to [`add_digit`], against
    /// [`Digit::ONE`] or [`Digit::ZERO`]. Two digits sum to at most 18, so
    /// with a carry the column never exceeds 19 and at most one of the two
    /// additions can overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use digits::{add_digit, Digit};
    ///
    /// let nine = Digit::new(9).unwrap();
    /// let sum = add_digit(nine, nine).with_carry(true);
    /// assert!(sum.carry);
    /// assert_eq!(sum.digit, nine);
    /// ```
    pub const fn with_carry(self, carry_in: bool) -> DigitSum {
        let carry_digit = if carry_in { Digit::ONE } else { Digit::ZERO };
        let folded = add_digit(self.digit, carry_digit);
        debug_assert!(!(self.carry && folded.carry));
        DigitSum {
            carry: self.carry || folded.carry,
            digit: folded.digit,
        }
    }
}

/// Adds two digits with no incoming carry.
///
/// # Examples
///
/// ```
/// use digits::{add_digit, Digit, DigitSum};
///
/// let sum = add_digit(Digit::new(7).unwrap(), Digit::new(5).unwrap());
/// assert_eq!(sum, DigitSum { carry: true, digit: Digit::new(2).unwrap() });
/// ```
pub const fn add_digit(x: Digit, y: Digit) -> DigitSum {
    let r = x.0 + y.0 - b'0';
    if r > b'9' {
        DigitSum {
            carry: true,
            digit: Digit(r - 10),
        }
    } else {
        DigitSum {
            carry: false,
            digit: Digit(r),
        }
    }
}
