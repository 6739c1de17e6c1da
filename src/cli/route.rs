//! CLI route: resolves configuration and dispatches commands to the tree module.

use crate::cli::parse::Commands;
use crate::config::{ConfigLoader, DirsumConfig};
use crate::error::{ApiError, StorageError};
use crate::report::{Report, ReportFormat};
use crate::tree::{Checksum, DirectoryChecksum};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Resolved inputs for one CLI invocation
pub struct RunContext {
    root: PathBuf,
    config: DirsumConfig,
}

impl RunContext {
    /// Load configuration and resolve the root to scan
    ///
    /// `config_path` replaces the standard config files when given.
    pub fn new(root: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(&path)?,
            None => {
                let working_dir = std::env::current_dir().map_err(StorageError::from)?;
                ConfigLoader::load(&working_dir)?
            }
        };
        Ok(Self::with_config(root, config))
    }

    /// Build a context from an already loaded configuration
    pub fn with_config(root: Option<PathBuf>, config: DirsumConfig) -> Self {
        let root = config.resolve_root(root.as_deref());
        Self { root, config }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &DirsumConfig {
        &self.config
    }

    /// Execute a command, writing the report to `out`
    pub fn execute<W: Write>(&self, command: &Commands, out: W) -> Result<Checksum, ApiError> {
        match command {
            Commands::Scan { format } => {
                let format: ReportFormat = format.parse()?;
                self.scan(format, out)
            }
            Commands::Verify {
                expected,
                format,
                quiet,
            } => {
                let expected: Checksum = expected.parse()?;
                let format: ReportFormat = format.parse()?;
                let actual = if *quiet {
                    self.scan(format, io::sink())?
                } else {
                    self.scan(format, out)?
                };
                verify(&expected, &actual)?;
                Ok(actual)
            }
        }
    }

    fn scan<W: Write>(&self, format: ReportFormat, out: W) -> Result<Checksum, ApiError> {
        match dunce::canonicalize(&self.root) {
            Ok(resolved) => info!(root = %self.root.display(), resolved = %resolved.display(), "Scanning"),
            Err(e) => warn!(root = %self.root.display(), "Cannot resolve root: {}", e),
        }

        let mut report = Report::new(out, format);
        let checksum = DirectoryChecksum::new(self.root.clone())
            .with_walker_config(self.config.walk.clone())
            .walk(|record| Ok(report.record(record)?))?;
        report.finish(&checksum).map_err(StorageError::from)?;
        Ok(checksum)
    }
}

/// Compare the computed checksum against the expected one
pub fn verify(expected: &Checksum, actual: &Checksum) -> Result<(), ApiError> {
    if expected == actual {
        info!(checksum = %actual, "Checksum verified");
        Ok(())
    } else {
        Err(ApiError::ChecksumMismatch {
            expected: expected.to_hex(),
            actual: actual.to_hex(),
        })
    }
}
