//! Configuration for archetype synthesis.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod archetype_config;
pub mod context_config;
pub mod observability_config;
pub mod synthesis_config;

pub use archetype_config::ArchetypeConfig;
pub use context_config::{ContextConfig, ContextException};
pub use observability_config::ObservabilityConfig;
pub use synthesis_config::{SynthesisConfig, SynthesisVariant};
