//! # archetype-core
//!
//! Foundation crate for archetype characterisation factor synthesis.
//! Defines the CF entity, the context model, collaborator traits, errors,
//! config, and tracing setup. The synthesis crate depends on this.

pub mod config;
pub mod constants;
pub mod context;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::ArchetypeConfig;
pub use context::{ContextPath, ContextResolver};
pub use errors::{ArchetypeError, ArchetypeResult};
pub use models::{
    CfPayload, CharacterisationFactor, Directionality, FlowKey, FlowRecord, PossibleValue,
    RawCfValue, UncertaintyParams,
};
