//! Stacking layers and layout protection levels.

use serde::{Deserialize, Serialize};

use super::macros::string_enum;

/// A named band of the stacking order, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Background,
    Content,
    Overlay,
    Modal,
    Floating,
    Notification,
}

string_enum!(Layer, "layer", {
    Background => "background",
    Content => "content",
    Overlay => "overlay",
    Modal => "modal",
    Floating => "floating",
    Notification => "notification",
});

/// Escalation policy of a layout region.
///
/// Only `Critical` changes validation outcomes today; the other levels are
/// carried for reporting and per-level queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtectionLevel {
    Low,
    Medium,
    High,
    Critical,
}

string_enum!(ProtectionLevel, "protection level", {
    Low => "low",
    Medium => "medium",
    High => "high",
    Critical => "critical",
});
