//! Arbitrary-precision addition of unsigned decimal digit strings.
//!
//! ```
//! use digits::{dec, DecimalString};
//!
//! const MAX_U32: DecimalString = dec!("4294967295");
//! assert_eq!(&MAX_U32 + &dec!("1"), "4294967296");
//! assert_eq!(digits::add_str("99", "1").unwrap(), "100");
//! ```

extern crate self as digits;

pub mod add;
pub mod decimal;
pub mod digit;
pub mod error;
pub mod overflow;

pub use crate::add::{add, add_str};
pub use crate::decimal::DecimalString;
pub use crate::digit::{add_digit, Digit, DigitSum};
pub use crate::error::{Error, Result};
pub use crate::overflow::{result_width, will_overflow};
pub use digits_macro::dec;
