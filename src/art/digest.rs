//! Content digests used as the entropy source for hash art.

use crate::error::ApiError;
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use std::fmt;

/// Bytes of hash output kept in a digest (128 bits, 32 hex characters).
pub const DIGEST_BYTES: usize = 16;

/// Hash function used to derive a [`Digest`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Blake3,
    Sha256,
    /// Matches the digests of the JavaScript tool this crate grew out of
    Md5,
}

impl HashAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Blake3 => "blake3",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Md5 => "md5",
        }
    }
}

/// Lowercase hex digest of some content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Digest(String);

impl Digest {
    /// Wrap an existing hex string. Anything outside `0-9a-fA-F` is rejected.
    /// An empty string is a valid (empty) digest.
    pub fn from_hex(hex: impl Into<String>) -> Result<Self, ApiError> {
        let hex = hex.into();
        if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ApiError::InvalidArgument(format!(
                "Digest must be hex, found {:?} in {:?}",
                bad, hex
            )));
        }
        Ok(Digest(hex.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value (0-15) of the hex character at `index`, wrapping around the digest.
    ///
    /// Returns 0 for an empty digest.
    pub fn nibble(&self, index: usize) -> u8 {
        let bytes = self.0.as_bytes();
        if bytes.is_empty() {
            return 0;
        }
        hex_value(bytes[index % bytes.len()])
    }

    /// First `n` characters, for human-readable stats.
    pub fn prefix(&self, n: usize) -> &str {
        // ASCII only, so byte and char positions agree
        let end = self.0.len().min(n);
        &self.0[..end]
    }
}

impl TryFrom<String> for Digest {
    type Error = ApiError;

    fn try_from(hex: String) -> Result<Self, Self::Error> {
        Digest::from_hex(hex)
    }
}

impl From<Digest> for String {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn hex_value(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

/// Digest `bytes` with the default algorithm.
pub fn compute_digest(bytes: &[u8]) -> Digest {
    compute_digest_with(HashAlgorithm::default(), bytes)
}

/// Digest `bytes` with `algorithm`, keeping the first [`DIGEST_BYTES`] bytes.
pub fn compute_digest_with(algorithm: HashAlgorithm, bytes: &[u8]) -> Digest {
    let hex = match algorithm {
        HashAlgorithm::Blake3 => {
            let hash = blake3::hash(bytes);
            hex::encode(&hash.as_bytes()[..DIGEST_BYTES])
        }
        HashAlgorithm::Sha256 => {
            let mut hasher = Sha256::new();
            hasher.update(bytes);
            let result = hasher.finalize();
            hex::encode(&result[..DIGEST_BYTES])
        }
        HashAlgorithm::Md5 => {
            let mut hasher = Md5::new();
            hasher.update(bytes);
            hex::encode(hasher.finalize())
        }
    };
    Digest(hex)
}
