//! Synthesis errors.

use super::error_code::{self, ArchetypeErrorCode};
use crate::models::FlowKey;

/// Errors from the aggregation passes.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("frequencies of {key} sum to {sum}, expected 1 (tolerance {tolerance})")]
    FrequencyInvariantViolation {
        key: FlowKey,
        sum: f64,
        tolerance: f64,
    },
}

impl ArchetypeErrorCode for SynthesisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FrequencyInvariantViolation { .. } => error_code::FREQUENCY_INVARIANT,
        }
    }
}
