//! Top-level error aggregating every subsystem via `From` conversions.

use super::error_code::{self, ArchetypeErrorCode};
use super::{ConfigError, InputError, SynthesisError};

/// Errors that can abort a method transform.
#[derive(Debug, thiserror::Error)]
pub enum ArchetypeError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Synthesis error: {0}")]
    Synthesis(#[from] SynthesisError),

    /// A collaborator failed to produce its records.
    #[error("Method source error: {0}")]
    Source(String),
}

impl ArchetypeErrorCode for ArchetypeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Synthesis(e) => e.error_code(),
            Self::Source(_) => error_code::SOURCE_ERROR,
        }
    }
}

pub type ArchetypeResult<T> = Result<T, ArchetypeError>;
