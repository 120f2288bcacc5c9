//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::paths::user_config_path;
use super::sources::environment::ENV_PREFIX;
use super::TermglowConfig;
use crate::error::ApiError;
use std::path::Path;
use tracing::debug;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the user file (if present) and environment.
    pub fn load() -> Result<TermglowConfig, ApiError> {
        let user_file = user_config_path().ok();
        debug!(user_file = ?user_file, "Loading configuration");
        let config = MergeService::load(user_file.as_deref(), None, ENV_PREFIX)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file with environment overlay.
    ///
    /// The user config file is not consulted.
    pub fn load_from_file(path: &Path) -> Result<TermglowConfig, ApiError> {
        debug!(file = %path.display(), "Loading configuration");
        let config = MergeService::load(None, Some(path), ENV_PREFIX)?;
        config.validate()?;
        Ok(config)
    }
}
