//! Role assigner: turns candidates and caller-asserted roles into
//! timestamped, provenance-tagged assignments.
//!
//! Confidence: manual = 1.0, auto = 0.8, inherited = the parent's.
//! There is no deduplication; analyzing a component twice yields two
//! independent sets of assignments.

use chrono::Utc;

use dualmount_core::constants::{AUTO_CONFIDENCE, MANUAL_CONFIDENCE};
use dualmount_core::errors::InputError;
use dualmount_core::Environment;

use super::catalog::RoleCatalog;
use super::types::{AssignmentSource, Provenance, RoleAssignment};

pub struct RoleAssigner<'a> {
    catalog: &'a RoleCatalog,
}

impl<'a> RoleAssigner<'a> {
    pub fn new(catalog: &'a RoleCatalog) -> Self {
        Self { catalog }
    }

    /// Assign detected candidates. Names missing from the catalog are dropped.
    pub fn assign_detected(
        &self,
        component_name: &str,
        environment: Environment,
        candidates: &[String],
        provenance: &Provenance,
    ) -> Vec<RoleAssignment> {
        candidates
            .iter()
            .filter(|role| {
                let known = self.catalog.contains(role);
                if !known {
                    tracing::debug!(
                        role = %role,
                        component = component_name,
                        "candidate role not in catalog, skipped"
                    );
                }
                known
            })
            .map(|role| {
                self.build(
                    component_name,
                    environment,
                    role,
                    AssignmentSource::Auto,
                    AUTO_CONFIDENCE,
                    provenance,
                )
            })
            .collect()
    }

    /// Assign a role the caller asserts directly.
    pub fn assign_manual(
        &self,
        component_name: &str,
        environment: Environment,
        role: &str,
        provenance: &Provenance,
    ) -> Result<RoleAssignment, InputError> {
        self.require_known(role)?;
        Ok(self.build(
            component_name,
            environment,
            role,
            AssignmentSource::Manual,
            MANUAL_CONFIDENCE,
            provenance,
        ))
    }

    /// Carry a parent's role down to a child, keeping the parent's confidence.
    pub fn assign_inherited(
        &self,
        component_name: &str,
        environment: Environment,
        parent: &RoleAssignment,
        provenance: &Provenance,
    ) -> Result<RoleAssignment, InputError> {
        self.require_known(&parent.role_name)?;
        if !(0.0..=1.0).contains(&parent.confidence) {
            return Err(InputError::InvalidConfidence {
                value: parent.confidence,
            });
        }
        Ok(self.build(
            component_name,
            environment,
            &parent.role_name,
            AssignmentSource::Inherited,
            parent.confidence,
            provenance,
        ))
    }

    fn require_known(&self, role: &str) -> Result<(), InputError> {
        if self.catalog.contains(role) {
            Ok(())
        } else {
            Err(InputError::UnknownRole {
                role: role.to_string(),
            })
        }
    }

    fn build(
        &self,
        component_name: &str,
        environment: Environment,
        role: &str,
        source: AssignmentSource,
        confidence: f64,
        provenance: &Provenance,
    ) -> RoleAssignment {
        RoleAssignment {
            component_name: component_name.to_string(),
            role_name: role.to_string(),
            environment,
            timestamp: Utc::now(),
            source,
            confidence,
            provenance: provenance.clone(),
        }
    }
}
