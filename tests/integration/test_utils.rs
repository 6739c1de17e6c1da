//! Shared test utilities for integration tests

use std::fs;
use std::path::Path;
use std::sync::Mutex;

/// Serializes tests that touch process-wide environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Run `f` with the given environment variables set, restoring them afterwards
pub fn with_env<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let saved: Vec<_> = vars
        .iter()
        .map(|(key, _)| (key.to_string(), std::env::var(key).ok()))
        .collect();

    for (key, value) in vars {
        std::env::set_var(key, value);
    }

    let result = f();

    for (key, original) in saved {
        match original {
            Some(value) => std::env::set_var(&key, value),
            None => std::env::remove_var(&key),
        }
    }

    result
}

/// Write `contents` to `root/relative`, creating parent directories
pub fn write_file(root: &Path, relative: &str, contents: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// A small tree resembling a configuration test-data directory
pub fn populate_sample_tree(root: &Path) {
    write_file(root, "config.yaml", b"version: 3\n");
    write_file(root, "data/a.txt", b"hi");
    write_file(root, "data/nested/b.bin", &[0u8, 1, 2, 3, 255]);
    write_file(root, "empty.txt", b"");
    write_file(root, ".meta/validation/ConfigDirChecksum.py", b"print('x')\n");
}
