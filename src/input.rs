//! Loading of share files. A share file is a JSON object holding the declared share count `n` and threshold `k`
//! under `keys`, and one record per share keyed by the share's index:
//!
//! ```json
//! {
//!     "keys": { "n": 2, "k": 2 },
//!     "1": { "base": "10", "value": "5" },
//!     "2": { "base": "16", "value": "7" }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use num::{BigInt, Signed};
use recombine_maths::Modulus;
use recombine_sharing::{EncodedShare, ShamirSecretSharing, Share, SharingError, ThresholdSecretSharingScheme};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

pub type Result<T> = std::result::Result<T, InputError>;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read share file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed share file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("share file has no `keys` entry")]
    MissingKeys,

    #[error("share index {0:?} is not a positive integer")]
    InvalidIndex(String),

    #[error("share {index} has an unreadable base {base:?}")]
    InvalidBase { index: String, base: String },

    #[error(transparent)]
    Sharing(#[from] SharingError),
}

/// The declared share count and threshold of a share file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Keys {
    pub n: usize,
    pub k: usize,
}

/// A base is written as a string in most share files, but plain numbers are accepted as well.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum Base {
    Number(u32),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
struct ShareRecord {
    base: Base,
    value: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ShareFile {
    keys: Option<Keys>,
    #[serde(flatten)]
    records: BTreeMap<String, ShareRecord>,
}

impl ShareFile {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: ShareFile = serde_json::from_str(json)?;
        if file.keys.is_none() {
            return Err(InputError::MissingKeys);
        }
        Ok(file)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file = Self::from_json_str(&json)?;
        info!(path = %path.display(), records = file.records.len(), "loaded share file");
        Ok(file)
    }

    pub fn keys(&self) -> Result<Keys> {
        self.keys.ok_or(InputError::MissingKeys)
    }

    /// The share records with parsed indices and bases, ordered by index.
    pub fn encoded_shares(&self) -> Result<Vec<EncodedShare>> {
        let mut shares = self
            .records
            .iter()
            .map(|(index, record)| {
                let x = parse_index(index)?;
                let base = parse_base(index, &record.base)?;
                Ok(EncodedShare {
                    index: x,
                    base,
                    value: record.value.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        shares.sort_by(|lhs, rhs| lhs.index.cmp(&rhs.index));
        Ok(shares)
    }

    /// Decode every share of the file. Fails before decoding anything if the declared threshold exceeds the declared
    /// share count.
    pub fn decode_shares(&self) -> Result<Vec<Share>> {
        let keys = self.keys()?;
        if keys.n < keys.k {
            return Err(SharingError::InsufficientShares {
                have: keys.n,
                need: keys.k,
            }
            .into());
        }

        if self.records.len() != keys.n {
            warn!(declared = keys.n, present = self.records.len(), "share count does not match the declared n");
        }

        let shares = self
            .encoded_shares()?
            .iter()
            .map(|share| share.decode().map_err(InputError::from))
            .collect::<Result<Vec<_>>>()?;

        debug!(shares = shares.len(), "decoded shares");
        Ok(shares)
    }

    /// Recover the secret from the `k` shares with the smallest indices.
    pub fn recover_secret(&self, modulus: &Modulus) -> Result<BigInt> {
        let keys = self.keys()?;
        let shares = self.decode_shares()?;
        let secret = ShamirSecretSharing::new(modulus.clone()).reconstruct_secret(&shares, keys.k)?;
        Ok(secret)
    }
}

fn parse_index(index: &str) -> Result<BigInt> {
    let valid_digits = !index.is_empty() && index.chars().all(|c| c.is_ascii_digit());
    match BigInt::from_str(index) {
        Ok(x) if valid_digits && x.is_positive() => Ok(x),
        _ => Err(InputError::InvalidIndex(index.to_string())),
    }
}

fn parse_base(index: &str, base: &Base) -> Result<u32> {
    match base {
        Base::Number(base) => Ok(*base),
        Base::Text(text) => text.trim().parse().map_err(|_| InputError::InvalidBase {
            index: index.to_string(),
            base: text.clone(),
        }),
    }
}
