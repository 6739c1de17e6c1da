//! Working directory config file source: ./dirsum.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;

/// Name of the per-directory configuration file
pub const CONFIG_FILE_NAME: &str = "dirsum.toml";

/// Add `<working_dir>/dirsum.toml` to builder when present.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    working_dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let config_path = working_dir.join(CONFIG_FILE_NAME);
    if config_path.is_file() {
        return Ok(builder.add_source(File::from(config_path).required(false)));
    }
    Ok(builder)
}
