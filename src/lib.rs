//! Recovery of a secret from the share files of a Shamir threshold secret sharing. The arithmetic lives in
//! `recombine_maths` and the interpolation in `recombine_sharing`; this crate reads share files and hands their decoded
//! shares to the reconstruction.

pub mod input;

pub use input::{InputError, Keys, ShareFile};
pub use recombine_maths::{decode_base_value, modular_inverse, reduce_modulo, MathsError, Modulus};
pub use recombine_sharing::{reconstruct_secret, Share, SharingError};
