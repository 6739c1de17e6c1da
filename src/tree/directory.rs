//! Directory checksum: walk, hash, fold

use crate::error::StorageError;
use crate::tree::checksum::Checksum;
use crate::tree::hasher;
use crate::tree::walker::{Walker, WalkerConfig};
use crate::types::FileRecord;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, instrument};

/// Computes the order-independent checksum of a directory tree
pub struct DirectoryChecksum {
    root: PathBuf,
    walker_config: WalkerConfig,
}

impl DirectoryChecksum {
    /// Create a checksum over the tree rooted at `root`
    ///
    /// Relative paths fed into each file digest are computed against this
    /// root, fixed once here.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            walker_config: WalkerConfig::default(),
        }
    }

    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the tree, hashing every non-hidden file
    ///
    /// `visit` receives each record in traversal order, before its digest is
    /// folded in. Any listing, read or visitor error aborts the walk and is
    /// returned; no partial checksum is produced.
    #[instrument(skip(self, visit), fields(root = %self.root.display()))]
    pub fn walk<F>(&self, mut visit: F) -> Result<Checksum, StorageError>
    where
        F: FnMut(&FileRecord) -> Result<(), StorageError>,
    {
        let start = Instant::now();
        let walker = Walker::with_config(self.root.clone(), self.walker_config.clone());

        let mut checksum = Checksum::zero();
        let mut file_count = 0usize;

        for entry in walker.files() {
            let entry = entry.map_err(|e| {
                error!("Directory walk failed: {}", e);
                e
            })?;

            let digest = hasher::compute_file_digest(&entry.relative_path, &entry.path)
                .map_err(|e| {
                    error!("Hashing failed: {}", e);
                    e
                })?;
            let record = FileRecord::new(entry.relative_path, digest);
            debug!(path = %record.relative_path, digest = %record.digest_hex(), "Hashed file");

            visit(&record)?;
            checksum.fold(&record.digest);
            file_count += 1;
        }

        info!(
            file_count,
            checksum = %checksum,
            duration_ms = start.elapsed().as_millis(),
            "Directory checksum complete"
        );

        Ok(checksum)
    }

    /// Walk the tree and return only the final checksum
    pub fn compute(&self) -> Result<Checksum, StorageError> {
        self.walk(|_| Ok(()))
    }

    /// Walk the tree and return every record along with the checksum
    pub fn records(&self) -> Result<(Vec<FileRecord>, Checksum), StorageError> {
        let mut records = Vec::new();
        let checksum = self.walk(|record| {
            records.push(record.clone());
            Ok(())
        })?;
        Ok((records, checksum))
    }
}
