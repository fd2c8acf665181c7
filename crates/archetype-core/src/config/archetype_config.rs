//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ContextConfig, ObservabilityConfig, SynthesisConfig, SynthesisVariant};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ARCHETYPE_*`)
/// 2. Project config (`archetype.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ArchetypeConfig {
    pub context: ContextConfig,
    pub synthesis: SynthesisConfig,
    pub observability: ObservabilityConfig,
}

impl ArchetypeConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ArchetypeConfig) -> Result<(), ConfigError> {
        if let Some(tol) = config.synthesis.dedup_rel_tol {
            if !tol.is_finite() || !(0.0..1.0).contains(&tol) {
                return Err(ConfigError::ValidationFailed {
                    field: "synthesis.dedup_rel_tol".to_string(),
                    message: "must be in [0.0, 1.0)".to_string(),
                });
            }
        }
        if let Some(tol) = config.synthesis.frequency_tolerance {
            if !tol.is_finite() || tol < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "synthesis.frequency_tolerance".to_string(),
                    message: "must be a non-negative number".to_string(),
                });
            }
        }
        for (i, exception) in config.context.exceptions.iter().enumerate() {
            if !(1..=2).contains(&exception.category.len()) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("context.exceptions[{i}].category"),
                    message: "must have 1 or 2 elements".to_string(),
                });
            }
            if exception.path.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("context.exceptions[{i}].path"),
                    message: "must not be empty".to_string(),
                });
            }
        }
        let level = config.observability.effective_log_level();
        if tracing_subscriber::EnvFilter::try_new(level).is_err() {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("not a valid filter directive: {level}"),
            });
        }
        Ok(())
    }

    fn merge_toml_file(config: &mut ArchetypeConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ArchetypeConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`. Options override only when `Some`; the
    /// exception table is replaced as a whole.
    fn merge(base: &mut ArchetypeConfig, other: &ArchetypeConfig) {
        base.context = other.context.clone();

        if other.synthesis.dedup_rel_tol.is_some() {
            base.synthesis.dedup_rel_tol = other.synthesis.dedup_rel_tol;
        }
        if other.synthesis.frequency_tolerance.is_some() {
            base.synthesis.frequency_tolerance = other.synthesis.frequency_tolerance;
        }
        if other.synthesis.default_uncertainty_type.is_some() {
            base.synthesis.default_uncertainty_type = other.synthesis.default_uncertainty_type;
        }
        if other.synthesis.variant.is_some() {
            base.synthesis.variant = other.synthesis.variant;
        }

        if other.observability.log_level.is_some() {
            base.observability.log_level = other.observability.log_level.clone();
        }
    }

    /// Pattern: `ARCHETYPE_DEDUP_REL_TOL`, `ARCHETYPE_VARIANT`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut ArchetypeConfig) {
        if let Ok(val) = std::env::var("ARCHETYPE_DEDUP_REL_TOL") {
            if let Ok(v) = val.parse::<f64>() {
                config.synthesis.dedup_rel_tol = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ARCHETYPE_FREQUENCY_TOLERANCE") {
            if let Ok(v) = val.parse::<f64>() {
                config.synthesis.frequency_tolerance = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ARCHETYPE_UNCERTAINTY_TYPE") {
            if let Ok(v) = val.parse::<i64>() {
                config.synthesis.default_uncertainty_type = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ARCHETYPE_VARIANT") {
            if let Ok(v) = val.parse::<SynthesisVariant>() {
                config.synthesis.variant = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ARCHETYPE_LOG_LEVEL") {
            config.observability.log_level = Some(val);
        }
    }
}
