//! Core types for directory checksums.

/// Hash: SHA-256 digest of a single file record
pub type Hash = [u8; 32];

/// One hashed file, produced during a walk and handed to the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path relative to the walked root, components joined with `/`
    pub relative_path: String,
    /// SHA-256 over the relative path bytes followed by the file contents
    pub digest: Hash,
}

impl FileRecord {
    pub fn new(relative_path: String, digest: Hash) -> Self {
        Self {
            relative_path,
            digest,
        }
    }

    /// Lowercase hex rendering of the digest
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }
}
