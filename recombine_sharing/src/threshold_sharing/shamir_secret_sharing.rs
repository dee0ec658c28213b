use num::{BigInt, One, Zero};
use recombine_maths::Modulus;
use tracing::{debug, trace};

use crate::error::{Result, SharingError};
use crate::share::{select_shares, Share};
use crate::ThresholdSecretSharingScheme;

/// Shamir's secret sharing scheme over the integers modulo a prime. Shares are points on a polynomial of degree
/// `threshold - 1` and the secret is its value at zero.
#[derive(Clone, Debug)]
pub struct ShamirSecretSharing {
    modulus: Modulus,
}

impl ShamirSecretSharing {
    pub fn new(modulus: Modulus) -> Self {
        ShamirSecretSharing { modulus }
    }

    pub fn modulus(&self) -> &Modulus {
        &self.modulus
    }
}

impl ThresholdSecretSharingScheme<BigInt, Share> for ShamirSecretSharing {
    /// Interpolates the secret from the `threshold` shares with the smallest indices using the Lagrange interpolation
    /// method.
    /// # Parameters
    /// - `shares` a collection of at least `threshold` shares, in any order
    /// - `threshold` the original threshold the shares were generated upon
    ///
    /// # Returns
    /// The secret reduced into `[0, p)`, `InsufficientShares` if fewer than `threshold` shares are given or
    /// `DuplicateIndex` if two of the selected shares have the same index
    fn reconstruct_secret(&self, shares: &[Share], threshold: usize) -> Result<BigInt> {
        let selected = select_shares(shares, threshold)?;
        reconstruct_secret(&selected, &self.modulus)
    }
}

/// Evaluate the unique polynomial of degree `shares.len() - 1` through all `shares` at zero. Every share takes part in
/// the interpolation.
/// # Returns
/// The secret reduced into `[0, p)`. Fails with `InsufficientShares` for an empty slice and with `DuplicateIndex` if
/// two shares have indices that are congruent modulo `modulus`.
pub fn reconstruct_secret(shares: &[Share], modulus: &Modulus) -> Result<BigInt> {
    if shares.is_empty() {
        return Err(SharingError::InsufficientShares { have: 0, need: 1 });
    }

    debug!(shares = shares.len(), %modulus, "interpolating secret");

    shares
        .iter()
        .enumerate()
        .try_fold(BigInt::zero(), |secret, (i, share)| {
            let basis = lagrange_basis_at_zero(shares, i, modulus)?;
            let term = modulus.mul(&share.y, &basis);
            trace!(x = %share.x, %term, "lagrange term");
            Ok(modulus.add(&secret, &term))
        })
}

/// The Lagrange basis polynomial of the `i`-th share evaluated at zero, i.e. the product of `-x_j / (x_i - x_j)` over
/// all other shares `j`.
fn lagrange_basis_at_zero(shares: &[Share], i: usize, modulus: &Modulus) -> Result<BigInt> {
    let x_i = &shares[i].x;

    let (numerator, denominator) = shares
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != i)
        .fold((BigInt::one(), BigInt::one()), |(numerator, denominator), (_, other)| {
            (
                modulus.mul(&numerator, &modulus.neg(&other.x)),
                modulus.mul(&denominator, &modulus.sub(x_i, &other.x)),
            )
        });

    if denominator.is_zero() {
        return Err(SharingError::DuplicateIndex { index: x_i.clone() });
    }

    let inverse = modulus.inverse(&denominator)?;
    Ok(modulus.mul(&numerator, &inverse))
}
