//! Role detector: a `(predicate, role)` rule table over a structured
//! description of an element's implementation surface.
//!
//! Output follows rule declaration order, not role priority. Conflicting
//! roles may both be reported; the conflict scan deals with them later.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use dualmount_core::errors::InputError;

/// Handlers that make an element pressable.
const PRESS_HANDLERS: &[&str] = &["onPress", "onLongPress", "onPressIn", "onPressOut", "onClick"];

/// Handlers that make an element accept typed input.
const INPUT_HANDLERS: &[&str] = &["onChangeText", "onChange", "onSubmitEditing"];

/// Structural building blocks an element is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuralMarker {
    View,
    Text,
    Touchable,
    Pressable,
    TextInput,
    Navigator,
    Alert,
    Toast,
    Modal,
    Label,
}

/// Caller-supplied description of an element. Never raw source text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurfaceDescription {
    /// Interaction handler names, e.g. `onPress`.
    pub handlers: Vec<String>,
    /// Textual content rendered by the element.
    pub text: Vec<String>,
    pub markers: BTreeSet<StructuralMarker>,
    /// The element carries its own style.
    pub styled: bool,
    pub href: Option<String>,
    pub accessibility_label: Option<String>,
}

impl SurfaceDescription {
    pub fn with_marker(mut self, marker: StructuralMarker) -> Self {
        self.markers.insert(marker);
        self
    }

    pub fn with_handler(mut self, handler: impl Into<String>) -> Self {
        self.handlers.push(handler.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text.push(text.into());
        self
    }

    pub fn styled(mut self) -> Self {
        self.styled = true;
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }

    pub fn has(&self, marker: StructuralMarker) -> bool {
        self.markers.contains(&marker)
    }

    pub fn has_press_handler(&self) -> bool {
        self.has_handler_in(PRESS_HANDLERS)
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty() || self.has(StructuralMarker::Text)
    }

    pub fn accepts_input(&self) -> bool {
        self.has(StructuralMarker::TextInput) || self.has_handler_in(INPUT_HANDLERS)
    }

    fn has_handler_in(&self, names: &[&str]) -> bool {
        self.handlers
            .iter()
            .any(|h| names.iter().any(|n| h.trim().eq_ignore_ascii_case(n)))
    }

    /// Blank handler names and blank optional strings are malformed.
    pub fn validate(&self) -> Result<(), InputError> {
        for handler in &self.handlers {
            InputError::require_non_blank("handler name", handler)?;
        }
        if let Some(href) = &self.href {
            InputError::require_non_blank("href", href)?;
        }
        if let Some(label) = &self.accessibility_label {
            InputError::require_non_blank("accessibility label", label)?;
        }
        Ok(())
    }
}

/// One heuristic: when `predicate` holds, `role` is a candidate.
#[derive(Debug, Clone)]
pub struct DetectionRule {
    pub id: String,
    pub role: String,
    pub predicate: fn(&SurfaceDescription) -> bool,
}

impl DetectionRule {
    pub fn new(
        id: impl Into<String>,
        role: impl Into<String>,
        predicate: fn(&SurfaceDescription) -> bool,
    ) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
            predicate,
        }
    }
}

/// Deterministic, side-effect-free role classifier.
#[derive(Debug, Clone)]
pub struct RoleDetector {
    rules: Vec<DetectionRule>,
}

impl RoleDetector {
    /// Detector with the built-in rule table.
    pub fn new() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    /// Append a rule; it is evaluated after every existing one.
    pub fn add_rule(&mut self, rule: DetectionRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[DetectionRule] {
        &self.rules
    }

    /// Candidate roles in rule order. A role named by several matching rules
    /// is reported once, at its first position.
    pub fn detect(&self, surface: &SurfaceDescription) -> SmallVec<[String; 4]> {
        let mut candidates: SmallVec<[String; 4]> = SmallVec::new();
        for rule in &self.rules {
            if (rule.predicate)(surface) && !candidates.iter().any(|c| c == &rule.role) {
                tracing::debug!(rule = %rule.id, role = %rule.role, "detection rule matched");
                candidates.push(rule.role.clone());
            }
        }
        candidates
    }
}

impl Default for RoleDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn builtin_rules() -> Vec<DetectionRule> {
    vec![
        DetectionRule::new("ROLE-BUTTON-001", "button", |s| {
            s.has(StructuralMarker::Touchable)
                || s.has(StructuralMarker::Pressable)
                || s.has_press_handler()
        }),
        DetectionRule::new("ROLE-LINK-002", "link", |s| {
            s.has_text() && (s.has_press_handler() || s.href.is_some())
        }),
        DetectionRule::new("ROLE-INPUT-003", "input", |s| s.accepts_input()),
        DetectionRule::new("ROLE-CONTENT-004", "content", |s| {
            s.has_text() && !s.has_press_handler() && !s.accepts_input()
        }),
        DetectionRule::new("ROLE-CONTAINER-005", "container", |s| {
            s.has(StructuralMarker::View) && s.styled && !s.has_press_handler()
        }),
        DetectionRule::new("ROLE-NAVIGATION-006", "navigation", |s| {
            s.has(StructuralMarker::Navigator)
        }),
        DetectionRule::new("ROLE-FEEDBACK-007", "feedback", |s| {
            s.has(StructuralMarker::Alert)
                || s.has(StructuralMarker::Toast)
                || s.has(StructuralMarker::Modal)
        }),
        DetectionRule::new("ROLE-LABEL-008", "label", |s| {
            s.has(StructuralMarker::Label) || s.accessibility_label.is_some()
        }),
    ]
}
