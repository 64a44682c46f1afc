//! Configuration system for the governance engine.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod conflict_config;
pub mod governance_config;
pub mod layer_config;
pub mod layout_config;
pub mod scoring_config;
pub mod validation_config;

pub use conflict_config::ConflictConfig;
pub use governance_config::GovernanceConfig;
pub use layer_config::{default_bands, LayerBound, LayerConfig};
pub use layout_config::LayoutConfig;
pub use scoring_config::{PriorityWeights, ScoringConfig};
pub use validation_config::ValidationConfig;
