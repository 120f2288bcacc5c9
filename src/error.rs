//! Error types for termglow.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to read a preview or stats source from disk.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("{source}: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReadError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReadError::Io {
            path: path.into(),
            source,
        }
    }

    /// Path that could not be read
    pub fn path(&self) -> &std::path::Path {
        match self {
            ReadError::Io { path, .. } => path,
        }
    }
}

/// Errors surfaced by the CLI dispatcher and setup code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Read error: {0}")]
    Read(#[from] ReadError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Prompt error: {0}")]
    PromptError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
