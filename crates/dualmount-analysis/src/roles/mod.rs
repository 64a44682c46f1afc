//! Role analysis: classification, conflicts, completeness, scoring.
//!
//! Subsystems:
//! - `catalog`: role definitions, built-ins plus caller extensions
//! - `detector`: `(predicate, role)` rule table over a surface description
//! - `assigner`: candidates and manual/inherited roles → assignments
//! - `conflicts`: pairwise conflict scan over one analysis
//! - `completeness`: required roles absent from an assignment set
//! - `scoring`: conflicts + missing roles → health score
//! - `reporter`: bundles results and remediation hints into `RoleAnalysis`
//! - `validation`: pass/fail verdict over a finished analysis

pub mod assigner;
pub mod catalog;
pub mod completeness;
pub mod conflicts;
pub mod detector;
pub mod reporter;
pub mod scoring;
pub mod types;
pub mod validation;

pub use assigner::RoleAssigner;
pub use catalog::RoleCatalog;
pub use completeness::CompletenessChecker;
pub use conflicts::ConflictDetector;
pub use detector::{DetectionRule, RoleDetector, StructuralMarker, SurfaceDescription};
pub use reporter::RoleAnalysisReporter;
pub use scoring::ScoringEngine;
pub use types::*;
pub use validation::{validate_role_assignments, RoleValidationResult};
