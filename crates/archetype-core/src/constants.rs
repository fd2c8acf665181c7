/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Relative tolerance under which two aggregated values collapse into one.
pub const DEFAULT_DEDUP_REL_TOL: f64 = 1e-5;

/// Allowed drift of a frequency sum away from 1.0.
pub const DEFAULT_FREQUENCY_TOLERANCE: f64 = 1e-9;

/// Distribution-family code written on freshly synthesized CFs.
/// `1` marks an empirical range with no further distributional assumption.
pub const DEFAULT_UNCERTAINTY_TYPE: i64 = 1;

/// Default log filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Project config file name looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "archetype.toml";
