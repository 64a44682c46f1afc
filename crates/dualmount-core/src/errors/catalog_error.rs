//! Role catalog mutation errors.

use super::error_code::{self, GovernanceErrorCode};

/// Errors raised when extending or shrinking the role catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("built-in role {name:?} cannot be removed")]
    BuiltinRole { name: String },

    #[error("role {name:?} is not defined in the catalog")]
    UnknownRole { name: String },

    #[error("role {name:?} is already defined")]
    DuplicateRole { name: String },

    #[error("invalid role definition {name:?}: {message}")]
    InvalidDefinition { name: String, message: String },
}

impl GovernanceErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::BuiltinRole { .. } => error_code::BUILTIN_ROLE_PROTECTED,
            _ => error_code::CATALOG_ERROR,
        }
    }
}
