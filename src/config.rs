//! Configuration System
//!
//! Layered configuration: built-in defaults, then the global config file, then
//! `dirsum.toml` in the working directory, then `DIRSUM_*` environment
//! variables. CLI flags are applied on top by the binary.

use crate::logging::LoggingConfig;
use crate::tree::WalkerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root scanned when neither the CLI nor the configuration names one:
/// two levels up from a `<root>/.meta/validation` working directory.
pub const DEFAULT_ROOT: &str = "../..";

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirsumConfig {
    /// Directory to checksum
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Traversal settings
    #[serde(default)]
    pub walk: WalkerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DirsumConfig {
    /// Root to scan: `cli_root` wins over the configured root, then the default
    pub fn resolve_root(&self, cli_root: Option<&Path>) -> PathBuf {
        cli_root
            .map(Path::to_path_buf)
            .or_else(|| self.root.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT))
    }
}
