//! Core types for layout governance.

use std::fmt;

use serde::{Deserialize, Serialize};

use dualmount_core::errors::InputError;
use dualmount_core::{Environment, Layer, ProtectionLevel};

/// When a contract applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutCondition {
    pub feature: String,
    pub version: String,
    pub screen: String,
}

/// Constraints a layout's z-index must satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRules {
    pub min_z_index: i64,
    pub max_z_index: i64,
    pub allowed_layers: Vec<Layer>,
    /// Layout ids this region must not overlap.
    pub conflicts: Vec<String>,
}

impl ContractRules {
    pub fn contains(&self, z_index: i64) -> bool {
        (self.min_z_index..=self.max_z_index).contains(&z_index)
    }

    fn validate(&self, field: &str) -> Result<(), InputError> {
        if self.min_z_index > self.max_z_index {
            return Err(InputError::InvalidRange {
                field: field.to_string(),
                min: self.min_z_index,
                max: self.max_z_index,
            });
        }
        Ok(())
    }
}

/// A registered z-index contract for one layout region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZIndexContract {
    pub layout_id: String,
    pub z_index: i64,
    pub layer: Layer,
    pub environment: Environment,
    pub conditions: Vec<LayoutCondition>,
    pub rules: ContractRules,
}

impl ZIndexContract {
    /// Contract pinned to exactly `z_index` on `layer`; widen with `with_range`.
    pub fn new(
        layout_id: impl Into<String>,
        z_index: i64,
        layer: Layer,
        environment: Environment,
    ) -> Self {
        Self {
            layout_id: layout_id.into(),
            z_index,
            layer,
            environment,
            conditions: Vec::new(),
            rules: ContractRules {
                min_z_index: z_index,
                max_z_index: z_index,
                allowed_layers: vec![layer],
                conflicts: Vec::new(),
            },
        }
    }

    pub fn with_range(mut self, min_z_index: i64, max_z_index: i64) -> Self {
        self.rules.min_z_index = min_z_index;
        self.rules.max_z_index = max_z_index;
        self
    }

    pub fn with_condition(mut self, condition: LayoutCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn validate(&self) -> Result<(), InputError> {
        InputError::require_non_blank("layout id", &self.layout_id)?;
        self.rules.validate("rules.zIndex")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FramePosition {
    Center,
    Bottom,
    Top,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    Visible,
    #[default]
    Hidden,
    Scroll,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameConstraints {
    pub min_width: Option<f64>,
    pub max_width: Option<f64>,
    pub min_height: Option<f64>,
    pub max_height: Option<f64>,
    pub aspect_ratio: Option<f64>,
    pub overflow: Overflow,
}

impl FrameConstraints {
    /// Every bound that is set must be a finite number. Sign and ordering
    /// are left to safe-frame validation.
    pub fn validate(&self) -> Result<(), InputError> {
        let bounds = [
            ("constraints.minWidth", self.min_width),
            ("constraints.maxWidth", self.max_width),
            ("constraints.minHeight", self.min_height),
            ("constraints.maxHeight", self.max_height),
            ("constraints.aspectRatio", self.aspect_ratio),
        ];
        for (field, value) in bounds {
            if let Some(value) = value.filter(|v| !v.is_finite()) {
                return Err(InputError::InvalidValue {
                    field: field.to_string(),
                    message: format!("{value} is not a finite number"),
                });
            }
        }
        Ok(())
    }
}

/// A protected layout container with fixed geometry.
///
/// Lives in its own table; a layout id may own both a contract and a shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeFrameShell {
    pub layout_id: String,
    pub dimensions: Dimensions,
    pub position: FramePosition,
    pub z_index: i64,
    pub environment: Environment,
    pub padding: Padding,
    pub constraints: FrameConstraints,
    pub rules: ContractRules,
}

impl SafeFrameShell {
    /// Geometry that cannot describe a real frame is rejected at registration.
    /// Inconsistent constraints are accepted and reported by validation.
    pub fn validate(&self) -> Result<(), InputError> {
        InputError::require_non_blank("layout id", &self.layout_id)?;
        let Dimensions { width, height } = self.dimensions;
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(InputError::InvalidValue {
                field: "dimensions".to_string(),
                message: format!("{width}x{height} is not a valid frame size"),
            });
        }
        self.constraints.validate()?;
        self.rules.validate("rules.zIndex")
    }
}

/// Escalation policy attached to a layout id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutProtection {
    pub layout_id: String,
    pub level: ProtectionLevel,
}

impl LayoutProtection {
    pub fn new(layout_id: impl Into<String>, level: ProtectionLevel) -> Self {
        Self {
            layout_id: layout_id.into(),
            level,
        }
    }
}

/// Outcome of storing a record under a layout id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Inserted,
    /// An earlier record for the id was overwritten (last write wins).
    Replaced,
}

impl Registration {
    pub fn is_replaced(self) -> bool {
        matches!(self, Self::Replaced)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    #[serde(rename = "z-index")]
    ZIndex,
    #[serde(rename = "layer")]
    Layer,
    #[serde(rename = "constraint")]
    Constraint,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZIndex => write!(f, "z-index"),
            Self::Layer => write!(f, "layer"),
            Self::Constraint => write!(f, "constraint"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationSeverity {
    Error,
    Warning,
}

/// Expected or actual value carried by a violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ViolationValue {
    Range { min: i64, max: i64 },
    Layer(Layer),
    Layers(Vec<Layer>),
    ZIndex(i64),
    Measure(f64),
    Unregistered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutViolation {
    #[serde(rename = "type")]
    pub kind: ViolationKind,
    pub severity: ViolationSeverity,
    pub message: String,
    pub layout_id: String,
    pub expected: ViolationValue,
    pub actual: ViolationValue,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub violations: Vec<LayoutViolation>,
}

impl LayoutValidationResult {
    /// Record a violation and mirror its message into errors or warnings.
    pub(crate) fn push(&mut self, violation: LayoutViolation) {
        match violation.severity {
            ViolationSeverity::Error => self.errors.push(violation.message.clone()),
            ViolationSeverity::Warning => self.warnings.push(violation.message.clone()),
        }
        self.violations.push(violation);
    }

    pub(crate) fn finish(mut self) -> Self {
        self.is_valid = self.errors.is_empty();
        self
    }
}

/// Totals across the layout tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSummary {
    pub total_contracts: usize,
    pub total_safe_frames: usize,
    pub total_protections: usize,
    pub critical_protections: usize,
    pub validation_errors: usize,
}

/// One item of a batch layout validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutCheck {
    pub layout_id: String,
    pub role: String,
    pub z_index: i64,
}

impl LayoutCheck {
    pub fn new(layout_id: impl Into<String>, role: impl Into<String>, z_index: i64) -> Self {
        Self {
            layout_id: layout_id.into(),
            role: role.into(),
            z_index,
        }
    }
}

/// A validation result tagged with what was validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedLayout {
    pub layout_id: String,
    pub z_index: i64,
    pub result: LayoutValidationResult,
}
