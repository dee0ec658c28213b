//! This module defines share fixtures common to multiple tests, saving each test from redefining them.

#![cfg(test)]

use num::{BigInt, Zero};
use num_bigint::RandBigInt;
use rand::Rng;
use recombine_maths::Modulus;

use crate::Share;

/// Evaluate the polynomial with the given coefficients, lowest degree first, at `x`.
pub(crate) fn evaluate_polynomial(coefficients: &[BigInt], x: &BigInt, modulus: &Modulus) -> BigInt {
    coefficients
        .iter()
        .rev()
        .fold(BigInt::zero(), |acc, coefficient| modulus.add(&modulus.mul(&acc, x), coefficient))
}

/// Share `secret` at the points `1..=count` on a random polynomial of degree `threshold - 1`.
pub(crate) fn generate_shares<R: Rng>(
    rng: &mut R,
    secret: &BigInt,
    count: usize,
    threshold: usize,
    modulus: &Modulus,
) -> Vec<Share> {
    let coefficients = std::iter::once(secret.clone())
        .chain((1..threshold).map(|_| rng.gen_bigint_range(&BigInt::zero(), modulus.value())))
        .collect::<Vec<_>>();

    (1..=count)
        .map(|x| {
            let x = BigInt::from(x);
            let y = evaluate_polynomial(&coefficients, &x, modulus);
            Share { x, y }
        })
        .collect()
}
