//! TOML file sources: the optional user file and an explicit, required file.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};
use std::path::Path;

/// Add a TOML file to the builder. Missing files are skipped unless `required`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
    required: bool,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if required && !path.exists() {
        return Err(ConfigError::Message(format!(
            "Config file not found: {}",
            path.display()
        )));
    }
    let builder = builder.add_source(
        File::from(path)
            .format(FileFormat::Toml)
            .required(required),
    );
    Ok(builder)
}
