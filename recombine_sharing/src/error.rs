//! Error types for share selection and reconstruction.

use num::BigInt;
use recombine_maths::MathsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SharingError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SharingError {
    #[error("two shares have the index {index}")]
    DuplicateIndex { index: BigInt },

    #[error("not enough shares: have {have}, need {need}")]
    InsufficientShares { have: usize, need: usize },

    #[error("threshold must be at least one")]
    InvalidThreshold,

    #[error(transparent)]
    Maths(#[from] MathsError),
}
