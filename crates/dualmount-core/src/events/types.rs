//! Event payloads emitted by the governance engine.

use serde::{Deserialize, Serialize};

use crate::types::{Environment, Priority};

/// A role analysis finished for one component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisCompleteEvent {
    pub component_name: String,
    pub environment: Environment,
    pub score: f64,
    pub assignment_count: usize,
    pub conflict_count: usize,
    pub missing_role_count: usize,
}

/// Two roles on one component conflict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictDetectedEvent {
    pub component_name: String,
    pub environment: Environment,
    pub roles: (String, String),
    pub severity: Priority,
}

/// Which layout table an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutTable {
    Contracts,
    SafeFrames,
    Protections,
}

/// A record was stored under a layout id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutRegisteredEvent {
    pub layout_id: String,
    pub table: LayoutTable,
    /// An earlier record for the same id was overwritten.
    pub replaced: bool,
}

/// A layout id was removed from every table holding it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutUnregisteredEvent {
    pub layout_id: String,
    pub tables: Vec<LayoutTable>,
}

/// A z-index was validated against a layout's contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutValidatedEvent {
    pub layout_id: String,
    pub z_index: i64,
    pub is_valid: bool,
    pub error_count: usize,
    pub warning_count: usize,
}

/// One item of a batch call was rejected; its siblings still ran.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItemFailedEvent {
    pub index: usize,
    pub item: String,
    pub error: String,
}
