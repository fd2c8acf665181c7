//! Tests for the archetype configuration system.

use std::sync::Mutex;

use archetype_core::config::{ArchetypeConfig, ContextException, SynthesisVariant};
use archetype_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_archetype_env_vars() {
    for key in [
        "ARCHETYPE_DEDUP_REL_TOL",
        "ARCHETYPE_FREQUENCY_TOLERANCE",
        "ARCHETYPE_UNCERTAINTY_TYPE",
        "ARCHETYPE_VARIANT",
        "ARCHETYPE_LOG_LEVEL",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn empty_toml_gives_defaults() {
    let config = ArchetypeConfig::from_toml("").unwrap();
    assert_eq!(config.synthesis.effective_dedup_rel_tol(), 1e-5);
    assert_eq!(config.synthesis.effective_frequency_tolerance(), 1e-9);
    assert_eq!(config.synthesis.effective_uncertainty_type(), 1);
    assert_eq!(
        config.synthesis.effective_variant(),
        SynthesisVariant::ImmediateChildren
    );
    assert_eq!(config.observability.effective_log_level(), "info");
    assert_eq!(
        config.context.exceptions,
        vec![ContextException::new(
            ["water", "ground-, long-term"],
            ["water", "ground-, long-term"]
        )]
    );
}

#[test]
fn partial_toml_overrides() {
    let toml = r#"
[synthesis]
dedup_rel_tol = 1e-3
variant = "weighted_descendants"

[[context.exceptions]]
category = ["air", "low population density, long-term"]
path = ["air", "low population density, long-term"]
"#;
    let config = ArchetypeConfig::from_toml(toml).unwrap();
    assert_eq!(config.synthesis.effective_dedup_rel_tol(), 1e-3);
    assert_eq!(
        config.synthesis.effective_variant(),
        SynthesisVariant::WeightedDescendants
    );
    // Listing exceptions replaces the built-in table.
    assert_eq!(config.context.exceptions.len(), 1);
    assert_eq!(config.context.exceptions[0].category[0], "air");
    // Untouched fields keep defaults.
    assert_eq!(config.synthesis.effective_uncertainty_type(), 1);
}

#[test]
fn invalid_toml_is_parse_error() {
    let err = ArchetypeConfig::from_toml("[synthesis\nvariant = 1").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn validate_rejects_bad_values() {
    let mut config = ArchetypeConfig::default();
    config.synthesis.dedup_rel_tol = Some(1.5);
    assert!(matches!(
        ArchetypeConfig::validate(&config),
        Err(ConfigError::ValidationFailed { ref field, .. }) if field == "synthesis.dedup_rel_tol"
    ));

    let mut config = ArchetypeConfig::default();
    config.synthesis.frequency_tolerance = Some(-1.0);
    assert!(ArchetypeConfig::validate(&config).is_err());

    let mut config = ArchetypeConfig::default();
    config.context.exceptions = vec![ContextException::new(["a", "b", "c"], ["a"])];
    assert!(ArchetypeConfig::validate(&config).is_err());

    let mut config = ArchetypeConfig::default();
    config.context.exceptions = vec![ContextException {
        category: vec!["air".to_string()],
        path: vec![],
    }];
    assert!(ArchetypeConfig::validate(&config).is_err());

    assert!(ArchetypeConfig::validate(&ArchetypeConfig::default()).is_ok());
}

#[test]
fn toml_round_trip_preserves_config() {
    let mut config = ArchetypeConfig::default();
    config.synthesis.variant = Some(SynthesisVariant::WeightedDescendants);
    config.synthesis.default_uncertainty_type = Some(3);
    let text = config.to_toml().unwrap();
    assert_eq!(ArchetypeConfig::from_toml(&text).unwrap(), config);
}

#[test]
fn load_without_project_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_archetype_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let config = ArchetypeConfig::load(dir.path()).unwrap();
    assert_eq!(config, ArchetypeConfig::default());
}

#[test]
fn env_overrides_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_archetype_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("archetype.toml"),
        r#"
[synthesis]
default_uncertainty_type = 2
variant = "immediate_children"
dedup_rel_tol = 1e-4
"#,
    )
    .unwrap();

    std::env::set_var("ARCHETYPE_VARIANT", "weighted_descendants");
    std::env::set_var("ARCHETYPE_UNCERTAINTY_TYPE", "not-a-number");

    let config = ArchetypeConfig::load(dir.path()).unwrap();
    assert_eq!(
        config.synthesis.effective_variant(),
        SynthesisVariant::WeightedDescendants
    );
    // Unparseable env values are ignored.
    assert_eq!(config.synthesis.effective_uncertainty_type(), 2);
    assert_eq!(config.synthesis.effective_dedup_rel_tol(), 1e-4);

    clear_archetype_env_vars();
}

#[test]
fn load_rejects_invalid_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_archetype_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("archetype.toml"),
        "[synthesis]\nfrequency_tolerance = -0.5\n",
    )
    .unwrap();
    assert!(matches!(
        ArchetypeConfig::load(dir.path()),
        Err(ConfigError::ValidationFailed { .. })
    ));
}
