//! Shared constants for the governance engine.

use crate::types::Layer;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project config file name looked up in the root directory.
pub const CONFIG_FILE_NAME: &str = "dualmount.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "DUALMOUNT_LOG";

// ---- Scoring ----

/// Starting health score of every analysis.
pub const BASE_SCORE: f64 = 100.0;

/// Points removed per conflict, scaled by the conflict severity weight.
pub const DEFAULT_CONFLICT_PENALTY: f64 = 20.0;

/// Points removed per missing required role, scaled by its priority weight.
pub const DEFAULT_MISSING_PENALTY: f64 = 15.0;

/// Bonus for a component with assignments and no conflicts.
pub const DEFAULT_CLEAN_BONUS: f64 = 10.0;

pub const DEFAULT_WEIGHT_CRITICAL: f64 = 1.0;
pub const DEFAULT_WEIGHT_HIGH: f64 = 0.8;
pub const DEFAULT_WEIGHT_MEDIUM: f64 = 0.6;
pub const DEFAULT_WEIGHT_LOW: f64 = 0.4;

/// More assignments than this on one component triggers a simplification hint.
pub const DEFAULT_RECOMMENDATION_ROLE_LIMIT: usize = 3;

// ---- Assignment confidence ----

/// Confidence of a manually supplied role.
pub const MANUAL_CONFIDENCE: f64 = 1.0;

/// Confidence of a heuristically detected role.
pub const AUTO_CONFIDENCE: f64 = 0.8;

// ---- Validation ----

/// Role-assignment validation suggests a review below this score.
pub const DEFAULT_MIN_SCORE: f64 = 70.0;

// ---- Layers ----

/// Lower bound of each stacking band, strictly increasing.
/// The last band is open-ended.
pub const DEFAULT_LAYER_BOUNDS: [(Layer, i64); 6] = [
    (Layer::Background, 0),
    (Layer::Content, 1),
    (Layer::Overlay, 100),
    (Layer::Modal, 500),
    (Layer::Floating, 800),
    (Layer::Notification, 900),
];
