//! The two parallel implementations being compared during migration.

use serde::{Deserialize, Serialize};

use super::macros::string_enum;

/// Environment variant of a component or layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Legacy,
    Nextgen,
}

string_enum!(Environment, "environment", {
    Legacy => "legacy",
    Nextgen => "nextgen",
});
