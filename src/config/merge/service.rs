//! MergeService: orchestrates sources and deserializes to TermglowConfig.

use crate::config::sources::{environment, file};
use crate::config::TermglowConfig;
use config::{Config, ConfigError};
use std::path::Path;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from the given sources.
    /// Precedence: defaults (lowest) -> user file -> explicit file -> environment (highest).
    pub fn load(
        user_file: Option<&Path>,
        explicit_file: Option<&Path>,
        env_prefix: &str,
    ) -> Result<TermglowConfig, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = user_file {
            builder = file::add_to_builder(builder, path, false)?;
        }
        if let Some(path) = explicit_file {
            builder = file::add_to_builder(builder, path, true)?;
        }
        let builder = environment::add_to_builder(builder, env_prefix)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
