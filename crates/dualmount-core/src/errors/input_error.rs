//! Caller input errors: malformed requests rejected before any work is done.

use super::error_code::{self, GovernanceErrorCode};

/// Malformed component, environment, role, or layout input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("unknown {kind}: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("role {role:?} is not defined in the catalog")]
    UnknownRole { role: String },

    #[error("confidence {value} is outside [0, 1]")]
    InvalidConfidence { value: f64 },

    #[error("invalid range for {field}: min {min} > max {max}")]
    InvalidRange { field: String, min: i64, max: i64 },

    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl InputError {
    /// Reject blank strings for a named field.
    pub fn require_non_blank(field: &'static str, value: &str) -> Result<(), InputError> {
        if value.trim().is_empty() {
            Err(InputError::EmptyField { field })
        } else {
            Ok(())
        }
    }
}

impl GovernanceErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownRole { .. } => error_code::UNKNOWN_ROLE,
            _ => error_code::INPUT_ERROR,
        }
    }
}
