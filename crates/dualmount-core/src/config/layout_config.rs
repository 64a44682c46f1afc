//! Layout governance configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LayoutConfig {
    /// Emit a layer warning when validating a layout with no contract.
    /// Default: true.
    pub warn_unregistered: Option<bool>,
    /// Register one contract per layer band when the engine is built.
    /// Default: false.
    pub seed_default_contracts: Option<bool>,
}

impl LayoutConfig {
    pub fn effective_warn_unregistered(&self) -> bool {
        self.warn_unregistered.unwrap_or(true)
    }

    pub fn effective_seed_default_contracts(&self) -> bool {
        self.seed_default_contracts.unwrap_or(false)
    }
}
