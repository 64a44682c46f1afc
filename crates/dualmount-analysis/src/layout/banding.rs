//! Layer banding: z-index to stacking layer.

use dualmount_core::config::{LayerBound, LayerConfig};
use dualmount_core::errors::ConfigError;
use dualmount_core::Layer;

/// Ordered lower-bound table. Each band runs from its `min` up to the next
/// band's `min - 1`; the last band is open-ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerBanding {
    bands: Vec<LayerBound>,
}

impl LayerBanding {
    pub fn new(bands: Vec<LayerBound>) -> Result<Self, ConfigError> {
        LayerConfig::validate_bands(&bands)?;
        Ok(Self { bands })
    }

    pub fn from_config(config: &LayerConfig) -> Result<Self, ConfigError> {
        Self::new(config.effective_bands())
    }

    /// The band containing `z_index`. Values below the first bound fall into
    /// the first band, so every integer resolves to a layer.
    pub fn layer_for(&self, z_index: i64) -> Layer {
        let position = self.bands.partition_point(|b| b.min <= z_index);
        let index = position.saturating_sub(1);
        self.bands[index].layer
    }

    /// Inclusive `(min, max)` of a band; `max` is `None` for the top band.
    pub fn range_of(&self, layer: Layer) -> Option<(i64, Option<i64>)> {
        let i = self.bands.iter().position(|b| b.layer == layer)?;
        let max = self.bands.get(i + 1).map(|next| next.min - 1);
        Some((self.bands[i].min, max))
    }

    pub fn bands(&self) -> &[LayerBound] {
        &self.bands
    }
}

impl Default for LayerBanding {
    fn default() -> Self {
        Self {
            bands: dualmount_core::config::default_bands(),
        }
    }
}
