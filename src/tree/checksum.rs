//! Order-independent accumulator over file digests
//!
//! The tree checksum is the byte-wise XOR of every file digest. XOR is
//! commutative and associative, so the result does not depend on the order
//! in which the filesystem lists entries.

use crate::error::ApiError;
use crate::types::Hash;
use std::fmt;
use std::str::FromStr;

/// Running XOR of file digests; all zeros for an empty tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Checksum(Hash);

impl Checksum {
    /// The empty accumulator (32 zero bytes)
    pub fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Fold a digest into the accumulator: `acc[i] ^= digest[i]`
    pub fn fold(&mut self, digest: &Hash) {
        for (acc, byte) in self.0.iter_mut().zip(digest.iter()) {
            *acc ^= byte;
        }
    }

    pub fn as_bytes(&self) -> &Hash {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Lowercase hex rendering (64 characters)
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<Hash> for Checksum {
    fn from(bytes: Hash) -> Self {
        Self(bytes)
    }
}

impl Extend<Hash> for Checksum {
    fn extend<I: IntoIterator<Item = Hash>>(&mut self, iter: I) {
        for digest in iter {
            self.fold(&digest);
        }
    }
}

impl FromIterator<Hash> for Checksum {
    fn from_iter<I: IntoIterator<Item = Hash>>(iter: I) -> Self {
        let mut checksum = Checksum::zero();
        checksum.extend(iter);
        checksum
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Checksum {
    type Err = ApiError;

    /// Parse a 64-character hex string (either case, surrounding whitespace ignored)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bytes = hex::decode(trimmed)
            .map_err(|e| ApiError::InvalidChecksum(format!("{}: {}", trimmed, e)))?;
        let hash: Hash = bytes.try_into().map_err(|b: Vec<u8>| {
            ApiError::InvalidChecksum(format!("expected 32 bytes, got {}", b.len()))
        })?;
        Ok(Self(hash))
    }
}
