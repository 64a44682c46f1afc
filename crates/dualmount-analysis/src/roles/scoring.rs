//! Scoring engine: conflicts and missing roles → 0-100 health score.
//!
//! score = 100
//!       - conflict_penalty × weight(conflict.severity)   per conflict
//!       - missing_penalty  × weight(role.priority)       per missing role
//!       + clean_bonus   if assignments exist and nothing conflicts
//! clamped to [0, 100].

use dualmount_core::config::ScoringConfig;
use dualmount_core::constants::BASE_SCORE;

use super::types::{RoleConflict, RoleDefinition};

#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn score(
        &self,
        assignment_count: usize,
        conflicts: &[RoleConflict],
        missing: &[&RoleDefinition],
    ) -> f64 {
        let weights = &self.config.weights;
        let conflict_penalty = self.config.effective_conflict_penalty();
        let missing_penalty = self.config.effective_missing_penalty();

        let mut score = BASE_SCORE;
        for conflict in conflicts {
            score -= conflict_penalty * weights.weight(conflict.severity);
        }
        for def in missing {
            score -= missing_penalty * weights.weight(def.priority);
        }
        if assignment_count > 0 && conflicts.is_empty() {
            score += self.config.effective_clean_bonus();
        }

        score.clamp(0.0, BASE_SCORE)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
