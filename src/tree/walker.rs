//! Filesystem walker for traversing directory structures
//!
//! Traversal is depth-first over an explicit work-list (walkdir keeps its own
//! stack of open directories), so deep trees do not grow the call stack.

use crate::error::StorageError;
use crate::tree::path;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// A regular file selected for hashing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path as reached from the root (root joined with the relative components)
    pub path: PathBuf,
    /// `/`-joined path relative to the root
    pub relative_path: String,
}

/// Filesystem walker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// Descend into symlinked directories and hash symlinked files through the link
    #[serde(default = "default_follow_symlinks")]
    pub follow_symlinks: bool,
    /// List directory entries by file name instead of filesystem order
    #[serde(default)]
    pub sort_by_name: bool,
}

fn default_follow_symlinks() -> bool {
    true
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: default_follow_symlinks(),
            sort_by_name: false,
        }
    }
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Iterate over the non-hidden files below the root
    ///
    /// Hidden entries are pruned before descent, so nothing under a hidden
    /// directory is ever listed. The root itself is exempt from the hidden
    /// test. The first listing error ends the useful part of the iteration;
    /// callers are expected to stop on it.
    pub fn files(&self) -> impl Iterator<Item = Result<FileEntry, StorageError>> + '_ {
        let mut walker = WalkDir::new(&self.root).follow_links(self.config.follow_symlinks);
        if self.config.sort_by_name {
            walker = walker.sort_by_file_name();
        }

        walker
            .into_iter()
            .filter_entry(|entry| !is_pruned(entry))
            .filter_map(move |entry| self.select(entry).transpose())
    }

    /// Collect every file entry, stopping at the first error
    pub fn walk(&self) -> Result<Vec<FileEntry>, StorageError> {
        self.files().collect()
    }

    fn select(
        &self,
        entry: Result<DirEntry, walkdir::Error>,
    ) -> Result<Option<FileEntry>, StorageError> {
        let entry = entry.map_err(|e| StorageError::Walk {
            path: e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| self.root.clone()),
            message: e.to_string(),
        })?;

        let file_type = entry.file_type();
        if file_type.is_dir() {
            return Ok(None);
        }

        // Only reachable with follow_symlinks disabled: walkdir reports the
        // link itself. Files are hashed through the link, directories skipped.
        if file_type.is_symlink() {
            let target = std::fs::metadata(entry.path()).map_err(|e| StorageError::Walk {
                path: entry.path().to_path_buf(),
                message: format!("Failed to resolve symlink: {}", e),
            })?;
            if target.is_dir() {
                debug!(path = %entry.path().display(), "Skipping symlinked directory");
                return Ok(None);
            }
        }

        let relative_path = path::relative_path_string(&self.root, entry.path())?;
        Ok(Some(FileEntry {
            path: entry.into_path(),
            relative_path,
        }))
    }
}

/// Hidden entries below the root are pruned; the root (depth 0) never is
fn is_pruned(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    let hidden = path::is_hidden_name(entry.file_name());
    if hidden {
        debug!(path = %entry.path().display(), "Skipping hidden entry");
    }
    hidden
}
