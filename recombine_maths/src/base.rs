//! Decoding of share values that are written down as numerals of an arbitrary base between 2 and 16.

use num::{BigInt, Zero};

use crate::error::{MathsError, Result};

/// Smallest base a share value may be written in.
pub const MIN_BASE: u32 = 2;

/// Largest base a share value may be written in. Digits beyond `9` are the letters `a` to `f` in either case.
pub const MAX_BASE: u32 = 16;

/// Decode a numeral string of the given base into an exact integer. Digits are accumulated from the most significant
/// one on, so the numeral may be arbitrarily long.
/// # Parameters
/// - `numeral` the digits of the value, without sign, prefix or whitespace
/// - `base` the base the numeral is written in, between `MIN_BASE` and `MAX_BASE`
///
/// # Returns
/// The non-negative integer denoted by `numeral`, or an error if the base is out of range, the numeral is empty or
/// one of its characters is not a digit of `base`.
pub fn decode_base_value(numeral: &str, base: u32) -> Result<BigInt> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(MathsError::InvalidBase(base));
    }

    if numeral.is_empty() {
        return Err(MathsError::EmptyNumeral);
    }

    let radix = BigInt::from(base);
    numeral
        .chars()
        .enumerate()
        .try_fold(BigInt::zero(), |acc, (position, character)| {
            let digit = digit_value(character, base).ok_or(MathsError::MalformedDigit {
                character,
                position,
                base,
            })?;
            Ok(acc * &radix + digit)
        })
}

/// The value of a single digit character, if it is a valid digit in `base`.
fn digit_value(character: char, base: u32) -> Option<u32> {
    character.to_digit(MAX_BASE).filter(|digit| *digit < base)
}

#[cfg(test)]
mod tests {
    use num::BigUint;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_hexadecimal() {
        assert_eq!(decode_base_value("ff", 16).unwrap(), BigInt::from(255));
        assert_eq!(decode_base_value("FF", 16).unwrap(), BigInt::from(255));
        assert_eq!(decode_base_value("aB", 16).unwrap(), BigInt::from(171));
    }

    #[test]
    fn test_octal() {
        assert_eq!(decode_base_value("777", 8).unwrap(), BigInt::from(511));
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(decode_base_value("000111", 2).unwrap(), BigInt::from(7));
        assert_eq!(decode_base_value("0", 10).unwrap(), BigInt::zero());
    }

    /// A value far beyond the 127 bit field must be decoded exactly
    #[test]
    fn test_wide_value() {
        let numeral = "f".repeat(64);
        let expected = (BigInt::from(1) << 256) - 1;
        assert_eq!(decode_base_value(&numeral, 16).unwrap(), expected);
    }

    #[test]
    fn test_digit_outside_base() {
        assert_eq!(
            decode_base_value("128", 8),
            Err(MathsError::MalformedDigit {
                character: '8',
                position: 2,
                base: 8
            })
        );
        assert_eq!(
            decode_base_value("1g", 16),
            Err(MathsError::MalformedDigit {
                character: 'g',
                position: 1,
                base: 16
            })
        );
    }

    #[test]
    fn test_sign_and_whitespace_are_malformed() {
        assert!(matches!(
            decode_base_value("-12", 10),
            Err(MathsError::MalformedDigit { character: '-', .. })
        ));
        assert!(matches!(
            decode_base_value(" 12", 10),
            Err(MathsError::MalformedDigit { character: ' ', .. })
        ));
    }

    #[test]
    fn test_invalid_base() {
        assert_eq!(decode_base_value("1", 1), Err(MathsError::InvalidBase(1)));
        assert_eq!(decode_base_value("1", 17), Err(MathsError::InvalidBase(17)));
    }

    #[test]
    fn test_empty_numeral() {
        assert_eq!(decode_base_value("", 10), Err(MathsError::EmptyNumeral));
    }

    proptest! {
        #[test]
        fn decoding_inverts_encoding(limbs in prop::collection::vec(any::<u32>(), 1..8), base in MIN_BASE..=MAX_BASE) {
            let value = BigUint::new(limbs);
            let numeral = value.to_str_radix(base);
            prop_assert_eq!(decode_base_value(&numeral, base).unwrap(), BigInt::from(value));
        }
    }
}
