//! This module defines the prime modulus all share arithmetic is carried out in, together with canonical reduction
//! and the multiplicative inverse. The modulus is a plain value handed to every operation instead of being baked into
//! a field type, so one process may recombine shares of differently sized fields.
//! Furthermore, it provides moduli built from Mersenne primes.

use std::fmt;

use num::{BigInt, One, Zero};
use once_cell::sync::Lazy;

use crate::error::{MathsError, Result};

/// Exponents `e` for which `2^e - 1` is prime and may be selected by `Modulus::mersenne`.
pub const MERSENNE_EXPONENTS: [u32; 15] = [2, 3, 5, 7, 13, 17, 19, 31, 61, 89, 107, 127, 521, 607, 1279];

static MERSENNE_127: Lazy<Modulus> = Lazy::new(|| Modulus(mersenne_number(127)));

/// A modulus greater than one. Primality is not checked; inverses only exist for all non-zero residues if the
/// modulus is prime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modulus(BigInt);

impl Modulus {
    /// Wrap `value` as a modulus. Fails with `InvalidModulus` if `value <= 1`.
    pub fn new(value: BigInt) -> Result<Self> {
        if value <= BigInt::one() {
            return Err(MathsError::InvalidModulus(value));
        }
        Ok(Modulus(value))
    }

    /// The Mersenne prime `2^exponent - 1`. Only exponents from `MERSENNE_EXPONENTS` are accepted.
    pub fn mersenne(exponent: u32) -> Result<Self> {
        if exponent == 127 {
            return Ok(Self::mersenne_127());
        }

        if !MERSENNE_EXPONENTS.contains(&exponent) {
            return Err(MathsError::UnknownMersenneExponent(exponent));
        }
        Ok(Modulus(mersenne_number(exponent)))
    }

    /// The prime `2^127 - 1` shares are recombined in by default.
    pub fn mersenne_127() -> Self {
        MERSENNE_127.clone()
    }

    /// Returns the modulus as an integer.
    pub fn value(&self) -> &BigInt {
        &self.0
    }

    /// Reduce `a` into `[0, m)`, regardless of the sign of `a`.
    pub fn reduce(&self, a: &BigInt) -> BigInt {
        // the remainder of a negative dividend is negative
        ((a % &self.0) + &self.0) % &self.0
    }

    /// `a + b`, reduced.
    pub fn add(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.reduce(&(a + b))
    }

    /// `a - b`, reduced.
    pub fn sub(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.reduce(&(a - b))
    }

    /// `a * b`, reduced.
    pub fn mul(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.reduce(&(a * b))
    }

    /// `-a`, reduced.
    pub fn neg(&self, a: &BigInt) -> BigInt {
        self.reduce(&-a)
    }

    /// Calculate the multiplicative inverse of `a`, i.e. the unique `x` in `[0, m)` with `a * x = 1 (mod m)`.
    /// Fails with `NonInvertible` if `a` shares a factor with the modulus, which for a prime modulus means `a` is a
    /// multiple of it.
    pub fn inverse(&self, a: &BigInt) -> Result<BigInt> {
        let non_invertible = || MathsError::NonInvertible {
            value: a.clone(),
            modulus: self.0.clone(),
        };

        // extended euclid on (a mod m, m), keeping x1 * a = b (mod m) and x0 * a = divisor (mod m)
        let (mut b, mut divisor) = (self.reduce(a), self.0.clone());
        let (mut x0, mut x1) = (BigInt::zero(), BigInt::one());

        while b > BigInt::one() {
            if divisor.is_zero() {
                // b is the gcd of a and m
                return Err(non_invertible());
            }

            let q = &b / &divisor;
            (b, divisor) = (divisor.clone(), &b % &divisor);
            (x0, x1) = (&x1 - &q * &x0, x0);
        }

        if b.is_zero() {
            return Err(non_invertible());
        }
        Ok(self.reduce(&x1))
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Canonical reduction of `a` into `[0, m)`, correct for negative `a`.
pub fn reduce_modulo(a: &BigInt, m: &Modulus) -> BigInt {
    m.reduce(a)
}

/// The multiplicative inverse of `a` modulo `m`. See `Modulus::inverse`.
pub fn modular_inverse(a: &BigInt, m: &Modulus) -> Result<BigInt> {
    m.inverse(a)
}

fn mersenne_number(exponent: u32) -> BigInt {
    (BigInt::one() << exponent as usize) - BigInt::one()
}
