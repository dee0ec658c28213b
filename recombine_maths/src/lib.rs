//! A crate containing the integer arithmetic needed to recombine Shamir shares: decoding numerals of arbitrary base
//! into unbounded integers and canonical arithmetic modulo a large prime.

pub mod base;
pub mod error;
pub mod modular;

pub use base::decode_base_value;
pub use error::{MathsError, Result};
pub use modular::{modular_inverse, reduce_modulo, Modulus};
