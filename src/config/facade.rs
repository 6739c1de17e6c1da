//! ConfigLoader facade delegating to the merge service.

use super::merge::service::MergeService;
use super::DirsumConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the standard files and environment.
    ///
    /// `working_dir` is searched for `dirsum.toml`.
    pub fn load(working_dir: &Path) -> Result<DirsumConfig, ConfigError> {
        MergeService::load(working_dir)
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<DirsumConfig, ConfigError> {
        MergeService::load_from_file(path)
    }

    /// Create default configuration.
    pub fn default() -> DirsumConfig {
        DirsumConfig::default()
    }
}
