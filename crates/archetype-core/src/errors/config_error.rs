//! Configuration errors.

use super::error_code::{self, ArchetypeErrorCode};

/// Errors from loading, validating, or applying configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    /// A runtime setting was given a value of the wrong kind.
    #[error("invalid configuration for {field}: {message}")]
    InvalidConfiguration { field: String, message: String },
}

impl ArchetypeErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration { .. } => error_code::INVALID_CONFIGURATION,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
