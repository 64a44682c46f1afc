//! Layer banding table configuration.
//!
//! The table maps z-index lower bounds to layers. Hosts remap it to match an
//! existing stacking scheme:
//!
//! ```toml
//! [[layers.bands]]
//! layer = "background"
//! min = 0
//!
//! [[layers.bands]]
//! layer = "content"
//! min = 1
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LAYER_BOUNDS;
use crate::errors::ConfigError;
use crate::types::Layer;

/// Lower bound (inclusive) of one stacking band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerBound {
    pub layer: Layer,
    pub min: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LayerConfig {
    /// Bands in stacking order. Empty means the compiled default table.
    pub bands: Vec<LayerBound>,
}

impl LayerConfig {
    /// Returns the effective band table.
    pub fn effective_bands(&self) -> Vec<LayerBound> {
        if self.bands.is_empty() {
            default_bands()
        } else {
            self.bands.clone()
        }
    }

    /// A band table must be strictly increasing and name each layer at most once.
    pub fn validate_bands(bands: &[LayerBound]) -> Result<(), ConfigError> {
        if bands.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "layers.bands".to_string(),
                message: "at least one band is required".to_string(),
            });
        }
        for pair in bands.windows(2) {
            if pair[1].min <= pair[0].min {
                return Err(ConfigError::ValidationFailed {
                    field: "layers.bands".to_string(),
                    message: format!(
                        "band {} (min {}) must start above band {} (min {})",
                        pair[1].layer, pair[1].min, pair[0].layer, pair[0].min
                    ),
                });
            }
        }
        for (i, bound) in bands.iter().enumerate() {
            if bands[..i].iter().any(|b| b.layer == bound.layer) {
                return Err(ConfigError::ValidationFailed {
                    field: "layers.bands".to_string(),
                    message: format!("layer {} appears more than once", bound.layer),
                });
            }
        }
        Ok(())
    }
}

/// The compiled default band table.
pub fn default_bands() -> Vec<LayerBound> {
    DEFAULT_LAYER_BOUNDS
        .iter()
        .map(|&(layer, min)| LayerBound { layer, min })
        .collect()
}
