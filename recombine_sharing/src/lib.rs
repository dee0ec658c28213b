//! A crate containing the share types of threshold secret sharing and the recombination of a secret from a threshold
//! set of Shamir shares. Generating shares is not in scope of this crate.

pub mod error;
pub mod share;
pub mod threshold_sharing;

#[cfg(test)]
mod test_implementations;

pub use error::{Result, SharingError};
pub use share::{select_shares, EncodedShare, Share};
pub use threshold_sharing::shamir_secret_sharing::{reconstruct_secret, ShamirSecretSharing};

/// A threshold secret sharing scheme that requires `threshold` of its shares to reconstruct the secret. The secret is
/// of type `T` and shares are of type `S`.
pub trait ThresholdSecretSharingScheme<T, S> {
    /// Take a slice of shares and reconstruct the secret from them. At least `threshold` shares must be present,
    /// otherwise the secret cannot be reconstructed
    /// # Parameters
    /// - `shares` a collection of at least `threshold` shares
    /// - `threshold` the original threshold the shares were generated upon. This may be less than the actual number
    /// of shares given, but it must be the same value as during generation
    ///
    /// # Returns
    /// Given that `threshold` matches the threshold at generation and enough distinct shares are present, it will
    /// return an instance of `T` that is reconstructed from the shares
    fn reconstruct_secret(&self, shares: &[S], threshold: usize) -> Result<T>;
}
