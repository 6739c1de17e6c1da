//! Relative path rendering and hidden-entry detection

use crate::error::StorageError;
use std::ffi::OsStr;
use std::path::{Component, Path};

/// Marker that hides an entry (and, for directories, everything below it)
pub const HIDDEN_PREFIX: char = '.';

/// Whether an entry's base name marks it as hidden
pub fn is_hidden_name(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with(HIDDEN_PREFIX)
}

/// Render `path` relative to `root` as a `/`-joined string
///
/// The result is what gets hashed ahead of the file contents, so it must be
/// identical across platforms: components are joined with `/` regardless of
/// the native separator. Names that are not valid UTF-8 are rejected.
pub fn relative_path_string(root: &Path, path: &Path) -> Result<String, StorageError> {
    let relative = path.strip_prefix(root).map_err(|_| {
        StorageError::InvalidPath(format!(
            "{} is not under {}",
            path.display(),
            root.display()
        ))
    })?;

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(name) => {
                let name = name.to_str().ok_or_else(|| {
                    StorageError::InvalidPath(format!(
                        "non-UTF-8 name in {}",
                        path.display()
                    ))
                })?;
                parts.push(name);
            }
            Component::CurDir => {}
            other => {
                return Err(StorageError::InvalidPath(format!(
                    "unexpected component {:?} in {}",
                    other,
                    path.display()
                )))
            }
        }
    }

    if parts.is_empty() {
        return Err(StorageError::InvalidPath(format!(
            "{} has no path relative to {}",
            path.display(),
            root.display()
        )));
    }

    Ok(parts.join("/"))
}
