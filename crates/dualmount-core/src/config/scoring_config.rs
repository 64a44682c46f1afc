//! Health score configuration.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::types::Priority;

/// Per-priority multipliers applied to conflict and missing-role penalties.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PriorityWeights {
    /// Default: 1.0.
    pub critical: Option<f64>,
    /// Default: 0.8.
    pub high: Option<f64>,
    /// Default: 0.6.
    pub medium: Option<f64>,
    /// Default: 0.4.
    pub low: Option<f64>,
}

impl PriorityWeights {
    /// Returns the effective weight for a priority.
    pub fn weight(&self, priority: Priority) -> f64 {
        match priority {
            Priority::Critical => self.critical.unwrap_or(constants::DEFAULT_WEIGHT_CRITICAL),
            Priority::High => self.high.unwrap_or(constants::DEFAULT_WEIGHT_HIGH),
            Priority::Medium => self.medium.unwrap_or(constants::DEFAULT_WEIGHT_MEDIUM),
            Priority::Low => self.low.unwrap_or(constants::DEFAULT_WEIGHT_LOW),
        }
    }
}

/// Configuration for the role scoring engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points per conflict before weighting. Default: 20.
    pub conflict_penalty: Option<f64>,
    /// Points per missing required role before weighting. Default: 15.
    pub missing_penalty: Option<f64>,
    /// Bonus when assignments exist and nothing conflicts. Default: 10.
    pub clean_bonus: Option<f64>,
    /// Assignment count above which a simplification hint is emitted. Default: 3.
    pub recommendation_role_limit: Option<usize>,
    pub weights: PriorityWeights,
}

impl ScoringConfig {
    pub fn effective_conflict_penalty(&self) -> f64 {
        self.conflict_penalty
            .unwrap_or(constants::DEFAULT_CONFLICT_PENALTY)
    }

    pub fn effective_missing_penalty(&self) -> f64 {
        self.missing_penalty
            .unwrap_or(constants::DEFAULT_MISSING_PENALTY)
    }

    pub fn effective_clean_bonus(&self) -> f64 {
        self.clean_bonus.unwrap_or(constants::DEFAULT_CLEAN_BONUS)
    }

    pub fn effective_recommendation_role_limit(&self) -> usize {
        self.recommendation_role_limit
            .unwrap_or(constants::DEFAULT_RECOMMENDATION_ROLE_LIMIT)
    }
}
