//! Environment variable source: TERMGLOW_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "TERMGLOW";

/// Add environment variable overlay to builder.
/// Uses `prefix` and `__` as separator for nested keys, e.g.
/// `TERMGLOW__PREVIEW__WIDTH=60`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    prefix: &str,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix(prefix)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
