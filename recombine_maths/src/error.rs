//! Error types for numeral decoding and modular arithmetic.

use num::BigInt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MathsError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathsError {
    #[error("malformed digit {character:?} at position {position} for base {base}")]
    MalformedDigit {
        character: char,
        position: usize,
        base: u32,
    },

    #[error("invalid base {0}, expected a base between 2 and 16")]
    InvalidBase(u32),

    #[error("empty numeral")]
    EmptyNumeral,

    #[error("{value} has no multiplicative inverse modulo {modulus}")]
    NonInvertible { value: BigInt, modulus: BigInt },

    #[error("modulus must be greater than one, got {0}")]
    InvalidModulus(BigInt),

    #[error("2^{0} - 1 is not a known mersenne prime")]
    UnknownMersenneExponent(u32),
}
