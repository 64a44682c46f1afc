//! Role analysis reporter: bundles one component's results and writes the
//! remediation hints.

use chrono::Utc;

use dualmount_core::Environment;

use super::types::{RoleAnalysis, RoleAssignment, RoleConflict, RoleDefinition, UnmetDependency};
use crate::report::{AnalysisOutcome, BatchReport};

#[derive(Debug, Clone)]
pub struct RoleAnalysisReporter {
    role_limit: usize,
}

impl RoleAnalysisReporter {
    /// `role_limit`: more assignments than this earn a simplification hint.
    pub fn new(role_limit: usize) -> Self {
        Self { role_limit }
    }

    /// One hint per conflict and per missing role, plus generic guidance when
    /// nothing or too much is assigned.
    pub fn recommendations(
        &self,
        assignments: &[RoleAssignment],
        conflicts: &[RoleConflict],
        missing: &[&RoleDefinition],
    ) -> Vec<String> {
        let mut recommendations: Vec<String> = conflicts
            .iter()
            .map(|c| format!("CONFLICT: {} - {}", c.description, c.resolution_hint))
            .collect();

        recommendations.extend(
            missing
                .iter()
                .map(|def| format!("MISSING: Add {} role - {}", def.name, def.description)),
        );

        if assignments.is_empty() {
            recommendations.push(
                "SUGGESTION: Consider adding explicit roles to improve accessibility".to_string(),
            );
        }
        if assignments.len() > self.role_limit {
            recommendations
                .push("SUGGESTION: Consider simplifying component with fewer roles".to_string());
        }

        recommendations
    }

    #[allow(clippy::too_many_arguments)]
    pub fn bundle(
        &self,
        component_name: &str,
        environment: Environment,
        assignments: Vec<RoleAssignment>,
        conflicts: Vec<RoleConflict>,
        missing: &[&RoleDefinition],
        unmet_dependencies: Vec<UnmetDependency>,
        score: f64,
    ) -> RoleAnalysis {
        let recommendations = self.recommendations(&assignments, &conflicts, missing);
        RoleAnalysis {
            component_name: component_name.to_string(),
            environment,
            assignments,
            conflicts,
            missing_roles: missing.iter().map(|def| def.name.clone()).collect(),
            unmet_dependencies,
            recommendations,
            score,
            timestamp: Utc::now(),
        }
    }

    /// Aggregate a batch of outcomes into an exportable report.
    pub fn aggregate(&self, outcomes: &[AnalysisOutcome]) -> BatchReport {
        BatchReport::build(outcomes)
    }
}

impl Default for RoleAnalysisReporter {
    fn default() -> Self {
        Self::new(dualmount_core::constants::DEFAULT_RECOMMENDATION_ROLE_LIMIT)
    }
}
