//! Validated decimal digit strings.

use crate::digit::Digit;
use crate::{Error, Result};
use std::borrow::Cow;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// A non-negative integer written as ASCII decimal digits, most significant
/// digit first.
///
/// A `DecimalString` is never empty and never holds anything but `'0'..='9'`.
/// Leading zeros are kept exactly as written; see
/// [`trim_leading_zeros`](DecimalString::trim_leading_zeros). Sums of such
/// values keep the written width too, so a sum is free of leading zeros only
/// when both operands are canonical.
///
/// # Examples
///
/// ```
/// use digits::DecimalString;
///
/// let n: DecimalString = "1234".parse().unwrap();
/// assert_eq!(n.len(), 4);
/// assert_eq!(n.to_string(), "1234");
/// assert!("12a4".parse::<DecimalString>().is_err());
/// ```
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct DecimalString(Cow<'static, str>);

impl DecimalString {
    /// Wraps a literal already checked to be a non-empty run of ASCII digits.
    ///
    /// This is the expansion target of [`dec!`](crate::dec), which performs
    /// the check at compile time.
    #[doc(hidden)]
    pub const fn from_static_unchecked(digits: &'static str) -> Self {
        DecimalString(Cow::Borrowed(digits))
    }

    /// Builds a value from digit bytes in most-significant-first order.
    pub(crate) fn from_ascii_unchecked(bytes: Vec<u8>) -> Self {
        debug_assert!(!bytes.is_empty() && bytes.iter().all(u8::is_ascii_digit));
        DecimalString(Cow::Owned(bytes.into_iter().map(char::from).collect()))
    }

    pub const fn zero() -> Self {
        DecimalString::from_static_unchecked("0")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits as written, leading zeros included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present to pair with [`len`](DecimalString::len).
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_zero(&self) -> bool {
        self.0.bytes().all(|b| b == b'0')
    }

    /// `true` unless the value carries leading zeros.
    pub fn is_canonical(&self) -> bool {
        self.len() == 1 || !self.0.starts_with('0')
    }

    /// The same value without leading zeros. `"000"` becomes `"0"`.
    pub fn trim_leading_zeros(&self) -> DecimalString {
        let trimmed = self.0.trim_start_matches('0');
        if trimmed.is_empty() {
            DecimalString::zero()
        } else if trimmed.len() == self.len() {
            self.clone()
        } else {
            DecimalString(Cow::Owned(trimmed.to_owned()))
        }
    }

    /// Digits in reading order, most significant first.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = Digit> + ExactSizeIterator + '_ {
        self.0.bytes().map(Digit::from_ascii_unchecked)
    }

    /// Digits least significant first, the order in which carries propagate.
    pub fn digits_lsb(&self) -> impl Iterator<Item = Digit> + ExactSizeIterator + '_ {
        self.digits().rev()
    }

    /// Digit at `position` counted from the least significant end.
    ///
    /// Positions past the most significant digit read as [`Digit::ZERO`], so
    /// operands of different widths line up without being padded.
    pub fn digit_at(&self, position: usize) -> Digit {
        let bytes = self.0.as_bytes();
        if position < bytes.len() {
            Digit::from_ascii_unchecked(bytes[bytes.len() - 1 - position])
        } else {
            Digit::ZERO
        }
    }

    fn validate(s: &str) -> Result<()> {
        if s.is_empty() {
            return Err(Error::EmptyOperand);
        }
        match s.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            Some((position, found)) => Err(Error::InvalidDigit { position, found }),
            None => Ok(()),
        }
    }
}

impl Default for DecimalString {
    fn default() -> Self {
        DecimalString::zero()
    }
}

impl FromStr for DecimalString {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        DecimalString::validate(s).map_err(|e| {
            tracing::debug!(operand = s, error = %e, "rejected decimal operand");
            e
        })?;
        Ok(DecimalString(Cow::Owned(s.to_owned())))
    }
}

impl TryFrom<&str> for DecimalString {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<String> for DecimalString {
    type Error = Error;
    fn try_from(s: String) -> Result<Self> {
        DecimalString::validate(&s).map_err(|e| {
            tracing::debug!(operand = %s, error = %e, "rejected decimal operand");
            e
        })?;
        Ok(DecimalString(Cow::Owned(s)))
    }
}

impl From<u64> for DecimalString {
    fn from(n: u64) -> Self {
        DecimalString(Cow::Owned(n.to_string()))
    }
}

impl From<u128> for DecimalString {
    fn from(n: u128) -> Self {
        DecimalString(Cow::Owned(n.to_string()))
    }
}

impl From<DecimalString> for String {
    fn from(n: DecimalString) -> Self {
        n.0.into_owned()
    }
}

impl AsRef<str> for DecimalString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for DecimalString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for DecimalString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for DecimalString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Debug for DecimalString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalString({:?})", self.as_str())
    }
}
