//! Subscriber setup and span definitions per pass: transform, synthesis.

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;
use crate::constants;
use crate::errors::ConfigError;

/// Install a global fmt subscriber filtered by the configured log level.
///
/// `RUST_LOG`, when set, takes precedence over the config value.
/// Returns `Ok(false)` if a global subscriber was already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> Result<bool, ConfigError> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directive) => EnvFilter::try_new(&directive),
        Err(_) => EnvFilter::try_new(config.effective_log_level()),
    }
    .map_err(|e| ConfigError::ValidationFailed {
        field: "observability.log_level".to_string(),
        message: e.to_string(),
    })?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok();
    if installed {
        tracing::info!(version = constants::VERSION, "archetype tracing initialised");
    }
    Ok(installed)
}

/// Create a span covering one method transform.
#[macro_export]
macro_rules! transform_span {
    ($cf_count:expr) => {
        tracing::info_span!($crate::tracing_setup::names::TRANSFORM, cf_count = $cf_count)
    };
}

/// Create a span covering one synthesis pass.
#[macro_export]
macro_rules! synthesis_span {
    ($pass:expr, $cf_count:expr) => {
        tracing::info_span!($crate::tracing_setup::names::SYNTHESIS, pass = %$pass, cf_count = $cf_count)
    };
}

/// Span names, shared by the macros above and by subscribers filtering on them.
pub mod names {
    pub const TRANSFORM: &str = "archetype.transform";
    pub const SYNTHESIS: &str = "archetype.synthesis";
}
