//! Role & layout governance for dual-mount UI migrations.
//!
//! Two pipelines share one engine value:
//! - `roles`: structured surface description → detected roles → assignments
//!   → conflicts + missing roles → 0-100 health score → `RoleAnalysis`
//! - `layout`: (layout id, role, z-index) checked against registered
//!   z-index contracts, the layer banding table, and protection levels
//!
//! `report` aggregates batches of analyses into exportable reports, and
//! `engine` holds the catalog, the running logs, and the layout tables.

pub mod engine;
pub mod layout;
pub mod report;
pub mod roles;

pub use engine::GovernanceEngine;
