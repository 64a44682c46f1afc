//! Top-level error returned by engine entry points.

use super::error_code::GovernanceErrorCode;
use super::{CatalogError, ConfigError, InputError};

/// Anything that can escape a `GovernanceEngine` call.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type EngineResult<T> = Result<T, EngineError>;

impl GovernanceErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
