//! Safe-frame constraint checks.
//!
//! Contradictory bounds and out-of-bounds dimensions are errors. Negative
//! bounds and a non-positive aspect ratio are warnings.

use super::banding::LayerBanding;
use super::types::{
    LayoutValidationResult, LayoutViolation, SafeFrameShell, ViolationKind, ViolationSeverity,
    ViolationValue,
};

pub fn check_safe_frame(shell: &SafeFrameShell, banding: &LayerBanding) -> LayoutValidationResult {
    let mut result = LayoutValidationResult::default();
    let c = &shell.constraints;
    let id = shell.layout_id.as_str();

    check_axis(&mut result, id, "width", shell.dimensions.width, c.min_width, c.max_width);
    check_axis(&mut result, id, "height", shell.dimensions.height, c.min_height, c.max_height);

    if let Some(ratio) = c.aspect_ratio {
        if ratio <= 0.0 {
            result.push(constraint(
                id,
                ViolationSeverity::Warning,
                "aspectRatio should be positive".to_string(),
                ViolationValue::Measure(0.0),
                ViolationValue::Measure(ratio),
            ));
        }
    }

    if !shell.rules.contains(shell.z_index) {
        result.push(LayoutViolation {
            kind: ViolationKind::ZIndex,
            severity: ViolationSeverity::Error,
            message: format!(
                "Z-index {} is outside allowed range [{}, {}]",
                shell.z_index, shell.rules.min_z_index, shell.rules.max_z_index
            ),
            layout_id: id.to_string(),
            expected: ViolationValue::Range {
                min: shell.rules.min_z_index,
                max: shell.rules.max_z_index,
            },
            actual: ViolationValue::ZIndex(shell.z_index),
        });
    }

    let layer = banding.layer_for(shell.z_index);
    if !shell.rules.allowed_layers.is_empty() && !shell.rules.allowed_layers.contains(&layer) {
        result.push(LayoutViolation {
            kind: ViolationKind::Layer,
            severity: ViolationSeverity::Warning,
            message: format!(
                "Z-index {} resolves to layer {layer}, which is not allowed",
                shell.z_index
            ),
            layout_id: id.to_string(),
            expected: ViolationValue::Layers(shell.rules.allowed_layers.clone()),
            actual: ViolationValue::Layer(layer),
        });
    }

    result.finish()
}

fn check_axis(
    result: &mut LayoutValidationResult,
    id: &str,
    axis: &str,
    value: f64,
    min: Option<f64>,
    max: Option<f64>,
) {
    for (bound_name, bound) in [("min", min), ("max", max)] {
        if let Some(b) = bound.filter(|b| *b < 0.0) {
            result.push(constraint(
                id,
                ViolationSeverity::Warning,
                format!("{bound_name}{} should be non-negative", capitalize(axis)),
                ViolationValue::Measure(0.0),
                ViolationValue::Measure(b),
            ));
        }
    }

    if let (Some(lo), Some(hi)) = (min, max) {
        if lo > hi {
            result.push(constraint(
                id,
                ViolationSeverity::Error,
                format!("min{0} cannot be greater than max{0}", capitalize(axis)),
                ViolationValue::Measure(hi),
                ViolationValue::Measure(lo),
            ));
            // Contradictory bounds; the dimension check would only repeat it.
            return;
        }
    }

    if let Some(lo) = min.filter(|lo| value < *lo) {
        result.push(constraint(
            id,
            ViolationSeverity::Error,
            format!("{axis} {value} is below min{} {lo}", capitalize(axis)),
            ViolationValue::Measure(lo),
            ViolationValue::Measure(value),
        ));
    }
    if let Some(hi) = max.filter(|hi| value > *hi) {
        result.push(constraint(
            id,
            ViolationSeverity::Error,
            format!("{axis} {value} is above max{} {hi}", capitalize(axis)),
            ViolationValue::Measure(hi),
            ViolationValue::Measure(value),
        ));
    }
}

fn constraint(
    id: &str,
    severity: ViolationSeverity,
    message: String,
    expected: ViolationValue,
    actual: ViolationValue,
) -> LayoutViolation {
    LayoutViolation {
        kind: ViolationKind::Constraint,
        severity,
        message,
        layout_id: id.to_string(),
        expected,
        actual,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::types::{
        ContractRules, Dimensions, FrameConstraints, FramePosition, Padding,
    };
    use dualmount_core::{Environment, Layer};

    fn modal_shell(constraints: FrameConstraints) -> SafeFrameShell {
        SafeFrameShell {
            layout_id: "modal-shell".to_string(),
            dimensions: Dimensions { width: 300.0, height: 400.0 },
            position: FramePosition::Center,
            z_index: 500,
            environment: Environment::Nextgen,
            padding: Padding::default(),
            constraints,
            rules: ContractRules {
                min_z_index: 500,
                max_z_index: 799,
                allowed_layers: vec![Layer::Modal],
                conflicts: Vec::new(),
            },
        }
    }

    #[test]
    fn consistent_shell_is_valid() {
        let shell = modal_shell(FrameConstraints {
            min_width: Some(200.0),
            max_width: Some(400.0),
            min_height: Some(100.0),
            max_height: Some(600.0),
            ..Default::default()
        });
        let result = check_safe_frame(&shell, &LayerBanding::default());
        assert!(result.is_valid, "{:?}", result.errors);
        assert!(result.violations.is_empty());
    }

    #[test]
    fn inverted_bounds_are_one_error() {
        let shell = modal_shell(FrameConstraints {
            min_width: Some(500.0),
            max_width: Some(400.0),
            ..Default::default()
        });
        let result = check_safe_frame(&shell, &LayerBanding::default());
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["minWidth cannot be greater than maxWidth"]);
    }

    #[test]
    fn negative_bound_and_ratio_warn() {
        let shell = modal_shell(FrameConstraints {
            min_height: Some(-1.0),
            aspect_ratio: Some(0.0),
            ..Default::default()
        });
        let result = check_safe_frame(&shell, &LayerBanding::default());
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 2);
    }
}
