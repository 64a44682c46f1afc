//! Core types for role analysis.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dualmount_core::errors::InputError;
use dualmount_core::{Environment, Priority, RoleCategory};

use super::detector::SurfaceDescription;

/// A semantic role a UI element can play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDefinition {
    pub name: String,
    pub description: String,
    pub category: RoleCategory,
    pub priority: Priority,
    /// Every analyzed component is expected to carry this role.
    pub required: bool,
    /// Informational; heuristic detection assigns any catalog role it finds.
    pub auto_assign: bool,
    pub conflicts: BTreeSet<String>,
    pub dependencies: BTreeSet<String>,
}

impl RoleDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: RoleCategory,
        priority: Priority,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category,
            priority,
            required: false,
            auto_assign: true,
            conflicts: BTreeSet::new(),
            dependencies: BTreeSet::new(),
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn auto_assign(mut self, auto_assign: bool) -> Self {
        self.auto_assign = auto_assign;
        self
    }

    pub fn conflicts_with(mut self, roles: &[&str]) -> Self {
        self.conflicts.extend(roles.iter().map(|r| r.to_string()));
        self
    }

    pub fn depends_on(mut self, roles: &[&str]) -> Self {
        self.dependencies.extend(roles.iter().map(|r| r.to_string()));
        self
    }

    /// Whether this definition's own conflict list names `other`.
    pub fn lists_conflict(&self, other: &str) -> bool {
        self.conflicts.contains(other)
    }
}

/// How an assignment came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentSource {
    Manual,
    Auto,
    Inherited,
}

impl fmt::Display for AssignmentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manual => write!(f, "manual"),
            Self::Auto => write!(f, "auto"),
            Self::Inherited => write!(f, "inherited"),
        }
    }
}

/// Where an assignment was made, as told by the caller. Never computed here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    /// Opaque location, e.g. a file path and line.
    pub locator: String,
    /// Free-form context.
    pub context: String,
}

impl Provenance {
    pub fn new(locator: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
            context: context.into(),
        }
    }
}

/// One role attached to one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    pub component_name: String,
    pub role_name: String,
    pub environment: Environment,
    pub timestamp: DateTime<Utc>,
    pub source: AssignmentSource,
    /// In [0, 1].
    pub confidence: f64,
    pub provenance: Provenance,
}

/// Two roles on one component that should not co-occur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleConflict {
    pub component_name: String,
    pub environment: Environment,
    /// In assignment order.
    pub roles: (String, String),
    /// The higher of the two roles' priorities.
    pub severity: Priority,
    pub description: String,
    pub resolution_hint: String,
    pub timestamp: DateTime<Utc>,
}

/// An assigned role whose declared dependency is not assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmetDependency {
    pub role: String,
    pub missing: String,
}

/// Result of one analysis call. Never merged across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAnalysis {
    pub component_name: String,
    pub environment: Environment,
    pub assignments: Vec<RoleAssignment>,
    pub conflicts: Vec<RoleConflict>,
    pub missing_roles: Vec<String>,
    pub unmet_dependencies: Vec<UnmetDependency>,
    pub recommendations: Vec<String>,
    /// In [0, 100].
    pub score: f64,
    pub timestamp: DateTime<Utc>,
}

impl RoleAnalysis {
    /// Whether the analysis surfaced anything worth a reviewer's attention.
    pub fn has_findings(&self) -> bool {
        !self.conflicts.is_empty() || !self.missing_roles.is_empty()
    }
}

/// Everything needed to analyze one component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub component_name: String,
    pub environment: Environment,
    #[serde(default)]
    pub surface: SurfaceDescription,
    /// Attached to every assignment this request produces.
    #[serde(default)]
    pub provenance: Provenance,
    /// Roles the caller asserts directly, assigned after detected ones.
    #[serde(default)]
    pub manual_roles: Vec<String>,
    /// Parent assignments to inherit, assigned last.
    #[serde(default)]
    pub inherited: Vec<RoleAssignment>,
}

impl AnalysisRequest {
    pub fn new(
        component_name: impl Into<String>,
        environment: Environment,
        surface: SurfaceDescription,
    ) -> Self {
        Self {
            component_name: component_name.into(),
            environment,
            surface,
            provenance: Provenance::default(),
            manual_roles: Vec::new(),
            inherited: Vec::new(),
        }
    }

    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = provenance;
        self
    }

    pub fn with_manual_role(mut self, role: impl Into<String>) -> Self {
        self.manual_roles.push(role.into());
        self
    }

    pub fn inheriting(mut self, parent: RoleAssignment) -> Self {
        self.inherited.push(parent);
        self
    }

    /// Reject malformed requests before any assignment is logged.
    pub fn validate(&self) -> Result<(), InputError> {
        InputError::require_non_blank("component name", &self.component_name)?;
        self.surface.validate()?;
        for role in &self.manual_roles {
            InputError::require_non_blank("manual role", role)?;
        }
        Ok(())
    }
}
