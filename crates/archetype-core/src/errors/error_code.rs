//! Stable error codes surfaced to collaborators.

pub const UNSUPPORTED_INPUT: &str = "UNSUPPORTED_INPUT";
pub const MISSING_FLOW_METADATA: &str = "MISSING_FLOW_METADATA";
pub const INVALID_CATEGORIES: &str = "INVALID_CATEGORIES";
pub const DUPLICATE_FLOW: &str = "DUPLICATE_FLOW";
pub const INVALID_CONFIGURATION: &str = "INVALID_CONFIGURATION";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const FREQUENCY_INVARIANT: &str = "FREQUENCY_INVARIANT";
pub const SOURCE_ERROR: &str = "SOURCE_ERROR";

/// Maps an error to a stable, machine-readable code.
pub trait ArchetypeErrorCode {
    fn error_code(&self) -> &'static str;
}
