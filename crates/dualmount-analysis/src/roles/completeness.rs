//! Completeness checker: required roles and declared dependencies.

use rustc_hash::FxHashSet;

use super::catalog::RoleCatalog;
use super::types::{RoleAssignment, RoleDefinition, UnmetDependency};

pub struct CompletenessChecker<'a> {
    catalog: &'a RoleCatalog,
}

impl<'a> CompletenessChecker<'a> {
    pub fn new(catalog: &'a RoleCatalog) -> Self {
        Self { catalog }
    }

    /// Required definitions absent from `assignments`, in catalog order.
    /// Environment plays no part.
    pub fn missing_roles(&self, assignments: &[RoleAssignment]) -> Vec<&'a RoleDefinition> {
        let assigned = assigned_names(assignments);
        self.catalog
            .required_roles()
            .filter(|def| !assigned.contains(def.name.as_str()))
            .collect()
    }

    /// Assigned roles whose declared dependencies are not assigned.
    pub fn unmet_dependencies(&self, assignments: &[RoleAssignment]) -> Vec<UnmetDependency> {
        let assigned = assigned_names(assignments);
        let mut reported: FxHashSet<&str> = FxHashSet::default();
        let mut unmet = Vec::new();

        for assignment in assignments {
            let role = assignment.role_name.as_str();
            if !reported.insert(role) {
                continue;
            }
            let Some(def) = self.catalog.get(role) else {
                continue;
            };
            for dependency in &def.dependencies {
                if !assigned.contains(dependency.as_str()) {
                    unmet.push(UnmetDependency {
                        role: role.to_string(),
                        missing: dependency.clone(),
                    });
                }
            }
        }

        unmet
    }
}

fn assigned_names(assignments: &[RoleAssignment]) -> FxHashSet<&str> {
    assignments.iter().map(|a| a.role_name.as_str()).collect()
}
