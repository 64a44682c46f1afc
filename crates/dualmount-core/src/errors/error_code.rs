//! GovernanceErrorCode trait for host-boundary conversion.

/// Every error enum implements this to give hosts a stable code string
/// alongside the human-readable message.
pub trait GovernanceErrorCode {
    /// Returns the stable error code (e.g., "INPUT_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const UNKNOWN_ROLE: &str = "UNKNOWN_ROLE";
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const BUILTIN_ROLE_PROTECTED: &str = "BUILTIN_ROLE_PROTECTED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
