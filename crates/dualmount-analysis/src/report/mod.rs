//! Batch aggregation and report exporters.

pub mod reporters;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dualmount_core::Environment;

use crate::layout::types::ValidatedLayout;
use crate::roles::types::RoleAnalysis;

pub use reporters::{
    available_formats, create_reporter, create_reporter_with_threshold, ConsoleReporter,
    JsonReporter, Reporter,
};

/// Result of one item in a batch analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum AnalysisOutcome {
    Completed {
        analysis: RoleAnalysis,
    },
    #[serde(rename_all = "camelCase")]
    Failed {
        component_name: String,
        environment: Environment,
        error: String,
    },
}

impl AnalysisOutcome {
    pub fn component_name(&self) -> &str {
        match self {
            Self::Completed { analysis } => &analysis.component_name,
            Self::Failed { component_name, .. } => component_name,
        }
    }

    pub fn environment(&self) -> Environment {
        match self {
            Self::Completed { analysis } => analysis.environment,
            Self::Failed { environment, .. } => *environment,
        }
    }

    pub fn analysis(&self) -> Option<&RoleAnalysis> {
        match self {
            Self::Completed { analysis } => Some(analysis),
            Self::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Result of one item in a batch layout validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum LayoutOutcome {
    Validated(ValidatedLayout),
    #[serde(rename_all = "camelCase")]
    Failed { layout_id: String, error: String },
}

impl LayoutOutcome {
    pub fn validated(&self) -> Option<&ValidatedLayout> {
        match self {
            Self::Validated(v) => Some(v),
            Self::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Successful analyses per environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentBreakdown {
    pub legacy: usize,
    pub nextgen: usize,
}

impl EnvironmentBreakdown {
    fn record(&mut self, environment: Environment) {
        match environment {
            Environment::Legacy => self.legacy += 1,
            Environment::Nextgen => self.nextgen += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSummary {
    pub component_name: String,
    pub environment: Environment,
    pub failed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub conflict_count: usize,
    pub missing_role_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregate over a batch of analysis outcomes.
///
/// Scores, conflicts, missing roles and the environment breakdown count
/// completed analyses only. Failed items appear in `perComponentSummaries`
/// with their error and in `failedComponents`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub total_components: usize,
    pub analyzed_components: usize,
    pub failed_components: usize,
    /// Completed analyses with conflicts or missing roles.
    pub flagged_components: usize,
    pub mean_score: f64,
    pub total_conflicts: usize,
    pub total_missing_roles: usize,
    pub environment_breakdown: EnvironmentBreakdown,
    pub per_component_summaries: Vec<ComponentSummary>,
}

impl BatchReport {
    pub fn build(outcomes: &[AnalysisOutcome]) -> Self {
        let mut breakdown = EnvironmentBreakdown::default();
        let mut summaries = Vec::with_capacity(outcomes.len());
        let mut score_sum = 0.0;
        let mut analyzed = 0usize;
        let mut flagged = 0usize;
        let mut total_conflicts = 0usize;
        let mut total_missing = 0usize;

        for outcome in outcomes {
            match outcome {
                AnalysisOutcome::Completed { analysis } => {
                    analyzed += 1;
                    score_sum += analysis.score;
                    total_conflicts += analysis.conflicts.len();
                    total_missing += analysis.missing_roles.len();
                    if analysis.has_findings() {
                        flagged += 1;
                    }
                    breakdown.record(analysis.environment);
                    summaries.push(ComponentSummary {
                        component_name: analysis.component_name.clone(),
                        environment: analysis.environment,
                        failed: false,
                        score: Some(analysis.score),
                        conflict_count: analysis.conflicts.len(),
                        missing_role_count: analysis.missing_roles.len(),
                        error: None,
                    });
                }
                AnalysisOutcome::Failed {
                    component_name,
                    environment,
                    error,
                } => summaries.push(ComponentSummary {
                    component_name: component_name.clone(),
                    environment: *environment,
                    failed: true,
                    score: None,
                    conflict_count: 0,
                    missing_role_count: 0,
                    error: Some(error.clone()),
                }),
            }
        }

        let mean_score = if analyzed == 0 {
            0.0
        } else {
            score_sum / analyzed as f64
        };

        Self {
            generated_at: Utc::now(),
            total_components: outcomes.len(),
            analyzed_components: analyzed,
            failed_components: outcomes.len() - analyzed,
            flagged_components: flagged,
            mean_score,
            total_conflicts,
            total_missing_roles: total_missing,
            environment_breakdown: breakdown,
            per_component_summaries: summaries,
        }
    }
}
