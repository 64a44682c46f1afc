//! Error handling for the governance engine.
//! One error enum per subsystem, `thiserror` only.
//!
//! Findings (role conflicts, missing roles, layout violations) are never
//! errors; they travel as data inside results. Only caller input and catalog
//! mutation problems cross the engine boundary as `Err`.

pub mod catalog_error;
pub mod config_error;
pub mod engine_error;
pub mod error_code;
pub mod input_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use engine_error::{EngineError, EngineResult};
pub use error_code::GovernanceErrorCode;
pub use input_error::InputError;
