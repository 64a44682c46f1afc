//! Tests for the governance configuration system.

use std::sync::Mutex;

use dualmount_core::config::{GovernanceConfig, LayerBound, LayerConfig};
use dualmount_core::errors::ConfigError;
use dualmount_core::{Layer, Priority};

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all DUALMOUNT_ env vars to prevent cross-test contamination.
fn clear_env_vars() {
    for key in [
        "DUALMOUNT_SCORING_CONFLICT_PENALTY",
        "DUALMOUNT_SCORING_MISSING_PENALTY",
        "DUALMOUNT_SCORING_CLEAN_BONUS",
        "DUALMOUNT_VALIDATION_MIN_SCORE",
        "DUALMOUNT_CONFLICTS_SYMMETRIC",
        "DUALMOUNT_LAYOUT_WARN_UNREGISTERED",
        "DUALMOUNT_LAYOUT_SEED_DEFAULT_CONTRACTS",
    ] {
        std::env::remove_var(key);
    }
}

/// CFG-01: no project file and no env vars gives the compiled defaults.
#[test]
fn test_defaults_without_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let config = GovernanceConfig::load(dir.path()).unwrap();

    assert_eq!(config.scoring.effective_conflict_penalty(), 20.0);
    assert_eq!(config.scoring.effective_missing_penalty(), 15.0);
    assert_eq!(config.scoring.effective_clean_bonus(), 10.0);
    assert_eq!(config.scoring.effective_recommendation_role_limit(), 3);
    assert_eq!(config.scoring.weights.weight(Priority::Critical), 1.0);
    assert_eq!(config.scoring.weights.weight(Priority::High), 0.8);
    assert_eq!(config.scoring.weights.weight(Priority::Medium), 0.6);
    assert_eq!(config.scoring.weights.weight(Priority::Low), 0.4);
    assert_eq!(config.validation.effective_min_score(), 70.0);
    assert!(config.conflicts.effective_symmetric());
    assert!(config.layout.effective_warn_unregistered());
    assert!(!config.layout.effective_seed_default_contracts());
    assert_eq!(config.layers.effective_bands().len(), 6);
}

/// CFG-02: env vars override the project file, which overrides defaults.
#[test]
fn test_env_overrides_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("dualmount.toml"),
        r#"
[scoring]
conflict_penalty = 30.0
missing_penalty = 12.0

[conflicts]
symmetric = false
"#,
    )
    .unwrap();

    std::env::set_var("DUALMOUNT_SCORING_CONFLICT_PENALTY", "25");
    std::env::set_var("DUALMOUNT_LAYOUT_WARN_UNREGISTERED", "false");

    let config = GovernanceConfig::load(dir.path()).unwrap();
    assert_eq!(config.scoring.effective_conflict_penalty(), 25.0);
    assert_eq!(config.scoring.effective_missing_penalty(), 12.0);
    assert!(!config.conflicts.effective_symmetric());
    assert!(!config.layout.effective_warn_unregistered());

    clear_env_vars();
}

/// CFG-03: unparsable env values are ignored.
#[test]
fn test_unparsable_env_value_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    std::env::set_var("DUALMOUNT_VALIDATION_MIN_SCORE", "not-a-number");
    let dir = tempdir();
    let config = GovernanceConfig::load(dir.path()).unwrap();
    assert_eq!(config.validation.effective_min_score(), 70.0);

    clear_env_vars();
}

/// CFG-04: an env override that breaks validation fails the load.
#[test]
fn test_invalid_env_override_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    std::env::set_var("DUALMOUNT_SCORING_MISSING_PENALTY", "-5");
    let dir = tempdir();
    let err = GovernanceConfig::load(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationFailed { ref field, .. } if field == "scoring.missing_penalty"
    ));

    clear_env_vars();
}

/// CFG-05: malformed TOML in the project file is a parse error naming the file.
#[test]
fn test_malformed_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("dualmount.toml"), "[scoring\nconflict_penalty = ").unwrap();
    let err = GovernanceConfig::load(dir.path()).unwrap_err();
    match err {
        ConfigError::ParseError { path, .. } => assert!(path.ends_with("dualmount.toml")),
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_from_file_missing() {
    let dir = tempdir();
    let err = GovernanceConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn test_weight_out_of_range_rejected() {
    let err = GovernanceConfig::from_toml(
        r#"
[scoring.weights]
high = 1.5
"#,
    )
    .unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "scoring.weights.high"),
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[test]
fn test_min_score_out_of_range_rejected() {
    assert!(GovernanceConfig::from_toml("[validation]\nmin_score = 120.0\n").is_err());
}

/// CFG-06: a custom band table replaces the defaults.
#[test]
fn test_custom_bands() {
    let config = GovernanceConfig::from_toml(
        r#"
[[layers.bands]]
layer = "background"
min = 0

[[layers.bands]]
layer = "content"
min = 1

[[layers.bands]]
layer = "modal"
min = 200
"#,
    )
    .unwrap();
    let bands = config.layers.effective_bands();
    assert_eq!(bands.len(), 3);
    assert_eq!(bands[2], LayerBound { layer: Layer::Modal, min: 200 });
}

#[test]
fn test_bands_must_increase() {
    let bands = [
        LayerBound { layer: Layer::Background, min: 0 },
        LayerBound { layer: Layer::Content, min: 100 },
        LayerBound { layer: Layer::Overlay, min: 100 },
    ];
    assert!(LayerConfig::validate_bands(&bands).is_err());
}

#[test]
fn test_bands_reject_repeated_layer() {
    let bands = [
        LayerBound { layer: Layer::Background, min: 0 },
        LayerBound { layer: Layer::Background, min: 10 },
    ];
    assert!(LayerConfig::validate_bands(&bands).is_err());
}

#[test]
fn test_bands_reject_empty_table() {
    assert!(LayerConfig::validate_bands(&[]).is_err());
}

#[test]
fn test_unknown_layer_name_is_parse_error() {
    let err = GovernanceConfig::from_toml(
        r#"
[[layers.bands]]
layer = "stratosphere"
min = 0
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

/// CFG-07: to_toml output loads back to the same effective values.
#[test]
fn test_toml_round_trip() {
    let config = GovernanceConfig::from_toml(
        r#"
[scoring]
conflict_penalty = 18.0
recommendation_role_limit = 5

[layout]
seed_default_contracts = true
"#,
    )
    .unwrap();
    let text = config.to_toml().unwrap();
    let reloaded = GovernanceConfig::from_toml(&text).unwrap();
    assert_eq!(reloaded.scoring.effective_conflict_penalty(), 18.0);
    assert_eq!(reloaded.scoring.effective_recommendation_role_limit(), 5);
    assert!(reloaded.layout.effective_seed_default_contracts());
}
