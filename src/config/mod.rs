//! Configuration
//!
//! Layered settings: built-in defaults, the user config file, an explicit
//! `--config` file, then `TERMGLOW__*` environment variables. CLI flags are
//! applied on top by the caller.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::art::{GridSize, HashAlgorithm, PreviewOptions};
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TermglowConfig {
    /// Theme name: default, neon, dark
    pub theme: Theme,

    /// Emit ANSI colors (still subject to NO_COLOR and TTY detection)
    pub color: bool,

    pub preview: PreviewConfig,

    pub logging: LoggingConfig,
}

impl Default for TermglowConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            color: true,
            preview: PreviewConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl TermglowConfig {
    /// Check values serde cannot constrain.
    pub fn validate(&self) -> Result<(), ApiError> {
        self.preview.options().map(|_| ())
    }
}

/// Image preview defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub width: usize,
    pub height: usize,
    pub algorithm: HashAlgorithm,
    /// Hash at most this many leading bytes of a file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bytes: Option<u64>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        let size = GridSize::default();
        Self {
            width: size.width(),
            height: size.height(),
            algorithm: HashAlgorithm::default(),
            max_bytes: None,
        }
    }
}

impl PreviewConfig {
    pub fn options(&self) -> Result<PreviewOptions, ApiError> {
        if self.max_bytes == Some(0) {
            return Err(ApiError::ConfigError(
                "preview.max_bytes must be positive".to_string(),
            ));
        }
        Ok(PreviewOptions {
            size: GridSize::new(self.width, self.height)?,
            algorithm: self.algorithm,
            max_bytes: self.max_bytes,
        })
    }
}
