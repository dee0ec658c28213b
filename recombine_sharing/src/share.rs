use std::fmt;

use num::BigInt;
use recombine_maths::decode_base_value;
use tracing::debug;

use crate::error::{Result, SharingError};

/// A decoded Shamir share: the point `(x, y)` on the sharing polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Share {
    pub x: BigInt,
    pub y: BigInt,
}

impl Share {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Share {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A share whose value is still written down as a numeral of some base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedShare {
    pub index: BigInt,
    pub base: u32,
    pub value: String,
}

impl EncodedShare {
    pub fn new(index: impl Into<BigInt>, base: u32, value: impl Into<String>) -> Self {
        EncodedShare {
            index: index.into(),
            base,
            value: value.into(),
        }
    }

    /// Decode the numeral into the share's `y` value.
    pub fn decode(&self) -> Result<Share> {
        let y = decode_base_value(&self.value, self.base)?;
        Ok(Share {
            x: self.index.clone(),
            y,
        })
    }
}

/// Select the `threshold` shares with the smallest `x` out of `shares`. Any further shares are ignored, and so are
/// inconsistencies they might have with the selected ones.
/// # Returns
/// The selected shares in ascending order of `x`, or `InsufficientShares` if fewer than `threshold` shares exist.
pub fn select_shares(shares: &[Share], threshold: usize) -> Result<Vec<Share>> {
    if threshold == 0 {
        return Err(SharingError::InvalidThreshold);
    }

    if shares.len() < threshold {
        return Err(SharingError::InsufficientShares {
            have: shares.len(),
            need: threshold,
        });
    }

    let mut selected = shares.to_vec();
    selected.sort_by(|lhs, rhs| lhs.x.cmp(&rhs.x));
    selected.truncate(threshold);

    debug!(
        available = shares.len(),
        threshold,
        indices = ?selected.iter().map(|share| share.x.to_string()).collect::<Vec<_>>(),
        "selected shares"
    );
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use recombine_maths::MathsError;

    use super::*;

    #[test]
    fn test_decode() {
        let share = EncodedShare::new(6, 4, "213").decode().unwrap();
        assert_eq!(share, Share::new(6, 39));
    }

    #[test]
    fn test_decode_malformed() {
        assert_eq!(
            EncodedShare::new(2, 2, "121").decode(),
            Err(SharingError::Maths(MathsError::MalformedDigit {
                character: '2',
                position: 1,
                base: 2
            }))
        );
    }

    #[test]
    fn test_select_smallest_indices() {
        let shares = vec![
            Share::new(6, 39),
            Share::new(2, 7),
            Share::new(3, 12),
            Share::new(1, 4),
        ];
        assert_eq!(
            select_shares(&shares, 3).unwrap(),
            vec![Share::new(1, 4), Share::new(2, 7), Share::new(3, 12)]
        );
    }

    #[test]
    fn test_select_all() {
        let shares = vec![Share::new(2, 7), Share::new(1, 4)];
        assert_eq!(
            select_shares(&shares, 2).unwrap(),
            vec![Share::new(1, 4), Share::new(2, 7)]
        );
    }

    #[test]
    fn test_select_insufficient() {
        let shares = vec![Share::new(1, 4), Share::new(2, 7)];
        assert_eq!(
            select_shares(&shares, 3),
            Err(SharingError::InsufficientShares { have: 2, need: 3 })
        );
    }

    #[test]
    fn test_select_zero_threshold() {
        assert_eq!(select_shares(&[Share::new(1, 4)], 0), Err(SharingError::InvalidThreshold));
    }

    #[test]
    fn test_display() {
        assert_eq!(Share::new(3, 12).to_string(), "(3, 12)");
    }
}
