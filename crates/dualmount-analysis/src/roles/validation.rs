//! Role-assignment validation: a pass/fail verdict over a finished analysis.

use serde::{Deserialize, Serialize};

use dualmount_core::Priority;

use super::catalog::RoleCatalog;
use super::types::RoleAnalysis;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
    pub score: f64,
}

/// High and critical conflicts fail validation, as does a missing critical
/// role; lesser findings are warnings.
pub fn validate_role_assignments(
    analysis: &RoleAnalysis,
    catalog: &RoleCatalog,
    min_score: f64,
) -> RoleValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    for conflict in &analysis.conflicts {
        if conflict.severity >= Priority::High {
            errors.push(conflict.description.clone());
        } else {
            warnings.push(conflict.description.clone());
        }
    }

    for role in &analysis.missing_roles {
        let critical = catalog
            .get(role)
            .is_some_and(|def| def.priority == Priority::Critical);
        if critical {
            errors.push(format!("Missing required role: {role}"));
        } else {
            warnings.push(format!("Missing role: {role}"));
        }
    }

    if analysis.score < min_score {
        suggestions
            .push("Consider reviewing role assignments for better accessibility".to_string());
    }
    if analysis.assignments.is_empty() {
        suggestions.push("Add explicit roles to improve component accessibility".to_string());
    }

    RoleValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        suggestions,
        score: analysis.score,
    }
}
