//! Role-assignment validation configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ValidationConfig {
    /// Score below which validation suggests a review (0-100). Default: 70.
    pub min_score: Option<f64>,
}

impl ValidationConfig {
    /// Returns the effective minimum score, defaulting to 70.
    pub fn effective_min_score(&self) -> f64 {
        self.min_score.unwrap_or(constants::DEFAULT_MIN_SCORE)
    }
}
