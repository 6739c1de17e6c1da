//! dirsum CLI Binary
//!
//! Prints one `<digest> <path>` line per file and a final `Checksum : <hex>` line.

use clap::Parser;
use dirsum::cli::{Cli, RunContext};
use dirsum::config::ConfigLoader;
use dirsum::logging::{init_logging, LoggingConfig};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let context = match RunContext::new(cli.root.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", dirsum::cli::map_error(&e));
            process::exit(1);
        }
    };
    info!(root = %context.root().display(), "dirsum starting");

    let stdout = std::io::stdout();
    match context.execute(&cli.command(), stdout.lock()) {
        Ok(checksum) => {
            info!(checksum = %checksum, "Command completed successfully");
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", dirsum::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and config file.
/// Logging stays off without --verbose so stdout carries only the report.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    if !cli.verbose {
        return LoggingConfig {
            level: "off".to_string(),
            ..LoggingConfig::default()
        };
    }

    let loaded = match cli.config {
        Some(ref config_path) => ConfigLoader::load_from_file(config_path),
        None => {
            let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            ConfigLoader::load(&working_dir)
        }
    };
    let mut config = loaded.map(|c| c.logging).unwrap_or_default();

    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = file.clone();
    }

    config
}
