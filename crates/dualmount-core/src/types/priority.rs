//! Role priority (doubles as finding severity) and role category.

use serde::{Deserialize, Serialize};

use super::macros::string_enum;

/// Priority of a role definition, and severity of the findings it drives.
///
/// Ordered from least to most severe, so `max()` picks the escalated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

string_enum!(Priority, "priority", {
    Low => "low",
    Medium => "medium",
    High => "high",
    Critical => "critical",
});

/// What family of behaviour a role belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleCategory {
    Layout,
    Content,
    Interaction,
    Navigation,
    Feedback,
}

string_enum!(RoleCategory, "role category", {
    Layout => "layout",
    Content => "content",
    Interaction => "interaction",
    Navigation => "navigation",
    Feedback => "feedback",
});
