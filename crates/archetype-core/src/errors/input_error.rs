//! Errors raised while turning raw method records into CFs.

use super::error_code::{self, ArchetypeErrorCode};
use crate::models::FlowKey;

/// Errors in the raw records handed over by the method source.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The source yielded a structured value where a plain number is required.
    #[error("uncertain CFs are not supported as input: {key} -> {value}")]
    UnsupportedInput { key: FlowKey, value: String },

    #[error("no flow metadata for {key}")]
    MissingFlowMetadata { key: FlowKey },

    #[error("categories must have 1 or 2 elements, got {len}: {categories:?}")]
    InvalidCategories { categories: Vec<String>, len: usize },

    #[error("the same flow has more than one characterisation factor: {key}")]
    DuplicateFlow { key: FlowKey },
}

impl ArchetypeErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedInput { .. } => error_code::UNSUPPORTED_INPUT,
            Self::MissingFlowMetadata { .. } => error_code::MISSING_FLOW_METADATA,
            Self::InvalidCategories { .. } => error_code::INVALID_CATEGORIES,
            Self::DuplicateFlow { .. } => error_code::DUPLICATE_FLOW,
        }
    }
}
