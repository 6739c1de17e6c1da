//! CLI parse: clap types for dirsum. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// dirsum - order-independent checksums over directory trees
#[derive(Parser, Debug)]
#[command(name = "dirsum", version)]
#[command(about = "Order-independent integrity checksum over a directory tree")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory to checksum (default: ../.. or the configured root)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable logging to stderr (default: off)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The command to run; a bare invocation scans
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or_default()
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Hash every non-hidden file and print the tree checksum
    Scan {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Compare the tree checksum against an expected value
    Verify {
        /// Expected checksum (64 hex characters)
        expected: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Suppress the report; only the exit status signals the result
        #[arg(long)]
        quiet: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Scan {
            format: "text".to_string(),
        }
    }
}
