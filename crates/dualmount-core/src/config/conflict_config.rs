//! Conflict detection configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConflictConfig {
    /// Treat a conflict listed on either role as a conflict of the pair.
    /// `false` scans only the literal direction (earlier role lists later
    /// role). Default: true.
    pub symmetric: Option<bool>,
}

impl ConflictConfig {
    pub fn effective_symmetric(&self) -> bool {
        self.symmetric.unwrap_or(true)
    }
}
