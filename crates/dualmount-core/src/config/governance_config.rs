//! Top-level governance configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ConflictConfig, LayerConfig, LayoutConfig, ScoringConfig, ValidationConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;
use crate::types::Priority;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`DUALMOUNT_*`)
/// 2. Project config (`dualmount.toml` in the root directory)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GovernanceConfig {
    pub scoring: ScoringConfig,
    pub validation: ValidationConfig,
    pub layers: LayerConfig,
    pub layout: LayoutConfig,
    pub conflicts: ConflictConfig,
}

impl GovernanceConfig {
    /// Load configuration for a project rooted at `root`.
    ///
    /// A missing project file is not an error; compiled defaults apply.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(CONFIG_FILE_NAME);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from an explicit TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    ///
    /// Weights stay in [0, 1] and penalties stay non-negative so that the
    /// score can only fall as findings accumulate.
    pub fn validate(config: &GovernanceConfig) -> Result<(), ConfigError> {
        for &priority in Priority::all() {
            let weight = config.scoring.weights.weight(priority);
            if !(0.0..=1.0).contains(&weight) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("scoring.weights.{priority}"),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        let penalties = [
            ("scoring.conflict_penalty", config.scoring.effective_conflict_penalty()),
            ("scoring.missing_penalty", config.scoring.effective_missing_penalty()),
            ("scoring.clean_bonus", config.scoring.effective_clean_bonus()),
        ];
        for (field, value) in penalties {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be a non-negative number".to_string(),
                });
            }
        }
        let min_score = config.validation.effective_min_score();
        if !(0.0..=100.0).contains(&min_score) {
            return Err(ConfigError::ValidationFailed {
                field: "validation.min_score".to_string(),
                message: "must be between 0 and 100".to_string(),
            });
        }
        if !config.layers.bands.is_empty() {
            LayerConfig::validate_bands(&config.layers.bands)?;
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `DUALMOUNT_SCORING_CONFLICT_PENALTY`, `DUALMOUNT_LAYOUT_WARN_UNREGISTERED`, etc.
    fn apply_env_overrides(config: &mut GovernanceConfig) {
        if let Some(v) = env_parse::<f64>("DUALMOUNT_SCORING_CONFLICT_PENALTY") {
            config.scoring.conflict_penalty = Some(v);
        }
        if let Some(v) = env_parse::<f64>("DUALMOUNT_SCORING_MISSING_PENALTY") {
            config.scoring.missing_penalty = Some(v);
        }
        if let Some(v) = env_parse::<f64>("DUALMOUNT_SCORING_CLEAN_BONUS") {
            config.scoring.clean_bonus = Some(v);
        }
        if let Some(v) = env_parse::<f64>("DUALMOUNT_VALIDATION_MIN_SCORE") {
            config.validation.min_score = Some(v);
        }
        if let Some(v) = env_parse::<bool>("DUALMOUNT_CONFLICTS_SYMMETRIC") {
            config.conflicts.symmetric = Some(v);
        }
        if let Some(v) = env_parse::<bool>("DUALMOUNT_LAYOUT_WARN_UNREGISTERED") {
            config.layout.warn_unregistered = Some(v);
        }
        if let Some(v) = env_parse::<bool>("DUALMOUNT_LAYOUT_SEED_DEFAULT_CONTRACTS") {
            config.layout.seed_default_contracts = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Unparsable values are ignored, leaving the lower layer in place.
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|val| val.trim().parse::<T>().ok())
}
