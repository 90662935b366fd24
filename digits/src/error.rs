//! Errors raised while constructing decimal values.

/// Rejection of an operand at the construction boundary.
///
/// Addition itself never fails; every variant here is produced before any
/// digit is added.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// `position` is the byte offset of `found` within the operand. Single
    /// `Digit` conversions have no operand and always report 0.
    #[error("invalid digit `{found}` at position {position}")]
    InvalidDigit { position: usize, found: char },

    #[error("empty operand")]
    EmptyOperand,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_digit_names_character_and_position() {
        let e = Error::InvalidDigit {
            position: 2,
            found: 'a',
        };
        assert_eq!(e.to_string(), "invalid digit `a` at position 2");
    }

    #[test]
    fn empty_operand_has_short_message() {
        assert_eq!(Error::EmptyOperand.to_string(), "empty operand");
    }
}
