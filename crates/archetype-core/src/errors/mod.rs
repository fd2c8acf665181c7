//! Error handling for archetype synthesis.
//! One error enum per concern, `thiserror` only. Every variant is fatal at
//! the core boundary: callers treat a failed transform as "nothing written".

pub mod archetype_error;
pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod synthesis_error;

pub use archetype_error::{ArchetypeError, ArchetypeResult};
pub use config_error::ConfigError;
pub use error_code::ArchetypeErrorCode;
pub use input_error::InputError;
pub use synthesis_error::SynthesisError;
