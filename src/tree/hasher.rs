//! Per-file digest computation using SHA-256
//!
//! digest = SHA-256(relative_path_utf8 || file_contents)
//!
//! Hashing the path ahead of the contents makes renames visible in the tree
//! checksum even when the bytes are unchanged.

use crate::error::StorageError;
use crate::types::Hash;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Compute the digest for a record from any reader
///
/// Contents are streamed through the hasher in chunks rather than buffered.
pub fn compute_record_digest<R: Read>(relative_path: &str, contents: &mut R) -> io::Result<Hash> {
    let mut hasher = Sha256::new();
    hasher.update(relative_path.as_bytes());
    io::copy(contents, &mut hasher)?;
    Ok(hasher.finalize().into())
}

/// Compute the digest for a file on disk
///
/// The file handle is scoped to this call and closed on every return path.
pub fn compute_file_digest(relative_path: &str, file_path: &Path) -> Result<Hash, StorageError> {
    let read_error = |source: io::Error| StorageError::FileRead {
        path: file_path.to_path_buf(),
        source,
    };
    let mut file = File::open(file_path).map_err(read_error)?;
    compute_record_digest(relative_path, &mut file).map_err(read_error)
}

/// Compute the digest for in-memory contents
pub fn compute_bytes_digest(relative_path: &str, contents: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(relative_path.as_bytes());
    hasher.update(contents);
    hasher.finalize().into()
}
