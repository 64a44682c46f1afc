//! Conflict detector: pairwise scan over one analysis' assignments.

use chrono::Utc;
use rustc_hash::FxHashSet;

use dualmount_core::Environment;

use super::catalog::RoleCatalog;
use super::types::{RoleAssignment, RoleConflict};

/// Finds role pairs the catalog marks as conflicting.
///
/// Every unordered pair (i < j) is checked. In symmetric mode a listing on
/// either role counts; otherwise only role_i's list is consulted. Each
/// unordered role-name pair is reported at most once per scan, so repeated
/// assignments of the same role do not multiply findings.
pub struct ConflictDetector<'a> {
    catalog: &'a RoleCatalog,
    symmetric: bool,
}

impl<'a> ConflictDetector<'a> {
    pub fn new(catalog: &'a RoleCatalog, symmetric: bool) -> Self {
        Self { catalog, symmetric }
    }

    pub fn detect(
        &self,
        component_name: &str,
        environment: Environment,
        assignments: &[RoleAssignment],
    ) -> Vec<RoleConflict> {
        let mut seen: FxHashSet<(&str, &str)> = FxHashSet::default();
        let mut conflicts = Vec::new();

        for (i, first) in assignments.iter().enumerate() {
            for second in &assignments[i + 1..] {
                let (a, b) = (first.role_name.as_str(), second.role_name.as_str());
                if a == b || !self.catalog.conflicts_between(a, b, self.symmetric) {
                    continue;
                }
                let key = if a < b { (a, b) } else { (b, a) };
                if !seen.insert(key) {
                    continue;
                }
                if let Some(conflict) = self.build(component_name, environment, a, b) {
                    conflicts.push(conflict);
                }
            }
        }

        conflicts
    }

    fn build(
        &self,
        component_name: &str,
        environment: Environment,
        a: &str,
        b: &str,
    ) -> Option<RoleConflict> {
        let first = self.catalog.get(a)?;
        let second = self.catalog.get(b)?;
        Some(RoleConflict {
            component_name: component_name.to_string(),
            environment,
            roles: (a.to_string(), b.to_string()),
            severity: first.priority.max(second.priority),
            description: format!("Conflicting roles: {a} and {b}"),
            resolution_hint: format!("Choose one role: {a} or {b}"),
            timestamp: Utc::now(),
        })
    }
}
