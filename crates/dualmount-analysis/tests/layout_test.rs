//! Tests for the layout store, banding, and validator.

use dualmount_analysis::layout::{
    ContractRules, Dimensions, FrameConstraints, FramePosition, LayerBanding,
    LayoutContractStore, LayoutProtection, LayoutValidator, Padding, Registration,
    SafeFrameShell, ViolationKind, ViolationSeverity, ViolationValue, ZIndexContract,
    CRITICAL_ESCALATION_MESSAGE,
};
use dualmount_core::config::LayerBound;
use dualmount_core::errors::InputError;
use dualmount_core::{Environment, Layer, ProtectionLevel};

fn toast_contract() -> ZIndexContract {
    ZIndexContract::new("toast-layer", 950, Layer::Notification, Environment::Nextgen)
        .with_range(900, 999)
}

fn store_with(contracts: Vec<ZIndexContract>) -> LayoutContractStore {
    let mut store = LayoutContractStore::new();
    for contract in contracts {
        store.register_contract(contract).unwrap();
    }
    store
}

fn shell(layout_id: &str, z_index: i64) -> SafeFrameShell {
    SafeFrameShell {
        layout_id: layout_id.to_string(),
        dimensions: Dimensions {
            width: 350.0,
            height: 80.0,
        },
        position: FramePosition::Bottom,
        z_index,
        environment: Environment::Nextgen,
        padding: Padding {
            top: 10.0,
            bottom: 10.0,
            left: 15.0,
            right: 15.0,
        },
        constraints: FrameConstraints {
            min_width: Some(250.0),
            max_width: Some(400.0),
            min_height: Some(60.0),
            max_height: Some(120.0),
            ..Default::default()
        },
        rules: ContractRules {
            min_z_index: 900,
            max_z_index: 999,
            allowed_layers: vec![Layer::Notification],
            conflicts: Vec::new(),
        },
    }
}

#[test]
fn test_toast_layer_in_range_is_valid() {
    let store = store_with(vec![toast_contract()]);
    let banding = LayerBanding::default();
    let validator = LayoutValidator::new(&store, &banding, true);

    let result = validator.validate("toast-layer", "feedback", 950).unwrap();
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
    assert!(result.violations.is_empty());
}

#[test]
fn test_toast_layer_out_of_range_is_one_error() {
    let store = store_with(vec![toast_contract()]);
    let banding = LayerBanding::default();
    let validator = LayoutValidator::new(&store, &banding, true);

    let result = validator.validate("toast-layer", "feedback", 50).unwrap();
    assert!(!result.is_valid);
    assert_eq!(result.errors, vec!["Z-index 50 is outside allowed range [900, 999]"]);

    let errors: Vec<_> = result
        .violations
        .iter()
        .filter(|v| v.severity == ViolationSeverity::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ViolationKind::ZIndex);
    assert_eq!(errors[0].expected, ViolationValue::Range { min: 900, max: 999 });
    assert_eq!(errors[0].actual, ViolationValue::ZIndex(50));

    // 50 resolves to the content band, so the layer mismatch is a warning.
    assert_eq!(result.warnings, vec!["Layer mismatch: expected content, got notification"]);
}

#[test]
fn test_layer_mismatch_inside_range_is_warning_only() {
    let contract = ZIndexContract::new("sheet", 450, Layer::Modal, Environment::Legacy)
        .with_range(400, 600);
    let store = store_with(vec![contract]);
    let banding = LayerBanding::default();
    let validator = LayoutValidator::new(&store, &banding, true);

    let result = validator.validate("sheet", "container", 450).unwrap();
    assert!(result.is_valid);
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].kind, ViolationKind::Layer);
    assert_eq!(result.violations[0].expected, ViolationValue::Layer(Layer::Overlay));
    assert_eq!(result.violations[0].actual, ViolationValue::Layer(Layer::Modal));
}

#[test]
fn test_unregistered_layout_warns_never_errors() {
    let store = LayoutContractStore::new();
    let banding = LayerBanding::default();
    let validator = LayoutValidator::new(&store, &banding, true);

    let result = validator.validate("ghost", "content", 10_000).unwrap();
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.violations[0].kind, ViolationKind::Layer);
    assert_eq!(result.violations[0].expected, ViolationValue::Unregistered);
    assert_eq!(result.violations[0].actual, ViolationValue::Layer(Layer::Notification));
}

#[test]
fn test_unregistered_warning_can_be_disabled() {
    let store = LayoutContractStore::new();
    let banding = LayerBanding::default();
    let validator = LayoutValidator::new(&store, &banding, false);

    let result = validator.validate("ghost", "content", 10).unwrap();
    assert!(result.is_valid);
    assert!(result.violations.is_empty());
}

#[test]
fn test_critical_protection_escalates() {
    let mut store = store_with(vec![toast_contract()]);
    store
        .register_protection(LayoutProtection::new("toast-layer", ProtectionLevel::Critical))
        .unwrap();
    let banding = LayerBanding::default();
    let validator = LayoutValidator::new(&store, &banding, true);

    let result = validator.validate("toast-layer", "feedback", 50).unwrap();
    assert_eq!(result.errors.len(), 2);
    assert_eq!(result.errors[1], CRITICAL_ESCALATION_MESSAGE);
    // Escalation is an extra error message, not another violation.
    assert_eq!(result.violations.len(), 2);

    let clean = validator.validate("toast-layer", "feedback", 950).unwrap();
    assert!(clean.is_valid);
    assert!(clean.errors.is_empty());
}

#[test]
fn test_critical_protection_without_contract_stays_valid() {
    let mut store = LayoutContractStore::new();
    store
        .register_protection(LayoutProtection::new("hero", ProtectionLevel::Critical))
        .unwrap();
    let banding = LayerBanding::default();
    let validator = LayoutValidator::new(&store, &banding, true);

    for z in [0, 5, 150, 950] {
        let result = validator.validate("hero", "container", z).unwrap();
        assert!(result.is_valid, "z-index {z} should stay valid");
        assert!(result.errors.is_empty());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.violations[0].expected, ViolationValue::Unregistered);
    }
}

#[test]
fn test_high_protection_does_not_escalate() {
    let mut store = store_with(vec![toast_contract()]);
    store
        .register_protection(LayoutProtection::new("toast-layer", ProtectionLevel::High))
        .unwrap();
    let banding = LayerBanding::default();
    let validator = LayoutValidator::new(&store, &banding, true);

    let result = validator.validate("toast-layer", "feedback", 50).unwrap();
    assert_eq!(result.errors.len(), 1);
}

#[test]
fn test_blank_inputs_rejected() {
    let store = LayoutContractStore::new();
    let banding = LayerBanding::default();
    let validator = LayoutValidator::new(&store, &banding, true);

    assert_eq!(
        validator.validate("", "feedback", 1),
        Err(InputError::EmptyField { field: "layout id" })
    );
    assert_eq!(
        validator.validate("toast-layer", " ", 1),
        Err(InputError::EmptyField { field: "role" })
    );
}

#[test]
fn test_reregistration_keeps_latest() {
    let mut store = LayoutContractStore::new();
    assert_eq!(
        store.register_contract(toast_contract()).unwrap(),
        Registration::Inserted
    );
    let replacement =
        ZIndexContract::new("toast-layer", 920, Layer::Notification, Environment::Legacy)
            .with_range(910, 930);
    assert_eq!(
        store.register_contract(replacement).unwrap(),
        Registration::Replaced
    );
    assert_eq!(store.contract_count(), 1);
    let stored = store.contract("toast-layer").unwrap();
    assert_eq!(stored.z_index, 920);
    assert_eq!(stored.environment, Environment::Legacy);
}

#[test]
fn test_inverted_contract_range_rejected() {
    let mut store = LayoutContractStore::new();
    let bad =
        ZIndexContract::new("broken", 10, Layer::Content, Environment::Legacy).with_range(50, 10);
    assert!(matches!(
        store.register_contract(bad),
        Err(InputError::InvalidRange { min: 50, max: 10, .. })
    ));
    assert_eq!(store.contract_count(), 0);
}

#[test]
fn test_contract_and_shell_share_an_id() {
    let mut store = store_with(vec![toast_contract()]);
    store.register_safe_frame(shell("toast-layer", 950)).unwrap();
    assert!(store.contract("toast-layer").is_some());
    assert!(store.safe_frame("toast-layer").is_some());
    assert_eq!(store.contract_count(), 1);
    assert_eq!(store.safe_frame_count(), 1);
}

#[test]
fn test_environment_and_level_queries() {
    let mut store = store_with(vec![
        toast_contract(),
        ZIndexContract::new("backdrop", 0, Layer::Background, Environment::Legacy),
        ZIndexContract::new("sheet", 500, Layer::Modal, Environment::Nextgen),
    ]);
    store.register_safe_frame(shell("toast-layer", 950)).unwrap();
    store
        .register_protection(LayoutProtection::new("sheet", ProtectionLevel::Critical))
        .unwrap();
    store
        .register_protection(LayoutProtection::new("backdrop", ProtectionLevel::Low))
        .unwrap();

    let nextgen: Vec<&str> = store
        .contracts_for_environment(Environment::Nextgen)
        .into_iter()
        .map(|c| c.layout_id.as_str())
        .collect();
    assert_eq!(nextgen, ["sheet", "toast-layer"]);
    assert_eq!(store.safe_frames_for_environment(Environment::Legacy).len(), 0);
    assert_eq!(store.protections_for_level(ProtectionLevel::Critical).len(), 1);
}

#[test]
fn test_validate_all_and_summary() {
    let mut store = store_with(vec![
        toast_contract(),
        // Declared z-index outside its own range.
        ZIndexContract::new("drawer", 150, Layer::Overlay, Environment::Legacy)
            .with_range(200, 300),
    ]);
    store
        .register_protection(LayoutProtection::new("drawer", ProtectionLevel::Critical))
        .unwrap();
    store.register_safe_frame(shell("toast-layer", 950)).unwrap();
    let banding = LayerBanding::default();
    let validator = LayoutValidator::new(&store, &banding, true);

    let all = validator.validate_all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].layout_id, "drawer");
    assert!(!all[0].result.is_valid);
    assert!(all[1].result.is_valid);

    let summary = validator.summary();
    assert_eq!(summary.total_contracts, 2);
    assert_eq!(summary.total_safe_frames, 1);
    assert_eq!(summary.total_protections, 1);
    assert_eq!(summary.critical_protections, 1);
    // Range error plus critical escalation on the drawer.
    assert_eq!(summary.validation_errors, 2);
}

#[test]
fn test_safe_frame_validation() {
    let mut store = LayoutContractStore::new();
    store.register_safe_frame(shell("toast-frame", 950)).unwrap();
    let mut narrow = shell("narrow-frame", 950);
    narrow.dimensions.width = 200.0;
    store.register_safe_frame(narrow).unwrap();
    let banding = LayerBanding::default();
    let validator = LayoutValidator::new(&store, &banding, true);

    assert!(validator.validate_safe_frame("toast-frame").unwrap().is_valid);

    let result = validator.validate_safe_frame("narrow-frame").unwrap();
    assert!(!result.is_valid);
    assert_eq!(result.errors, vec!["width 200 is below minWidth 250"]);
    assert_eq!(result.violations[0].kind, ViolationKind::Constraint);

    assert!(validator.validate_safe_frame("missing").is_none());
}

#[test]
fn test_safe_frame_band_outside_allowed_layers_warns() {
    let mut store = LayoutContractStore::new();
    let mut frame = shell("low-frame", 950);
    frame.rules.min_z_index = 0;
    frame.z_index = 50;
    store.register_safe_frame(frame).unwrap();
    let banding = LayerBanding::default();
    let validator = LayoutValidator::new(&store, &banding, true);

    let result = validator.validate_safe_frame("low-frame").unwrap();
    assert!(result.is_valid);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.violations[0].actual, ViolationValue::Layer(Layer::Content));
}

#[test]
fn test_invalid_safe_frame_dimensions_rejected() {
    let mut store = LayoutContractStore::new();
    let mut frame = shell("bad-frame", 950);
    frame.dimensions.height = f64::NAN;
    assert!(matches!(
        store.register_safe_frame(frame),
        Err(InputError::InvalidValue { .. })
    ));
}

#[test]
fn test_non_finite_constraints_rejected() {
    let mut store = LayoutContractStore::new();

    let mut nan_bound = shell("nan-bound", 950);
    nan_bound.constraints.max_width = Some(f64::NAN);
    match store.register_safe_frame(nan_bound) {
        Err(InputError::InvalidValue { field, .. }) => assert_eq!(field, "constraints.maxWidth"),
        other => panic!("expected InvalidValue, got {other:?}"),
    }

    let mut infinite_ratio = shell("inf-ratio", 950);
    infinite_ratio.constraints.aspect_ratio = Some(f64::INFINITY);
    match store.register_safe_frame(infinite_ratio) {
        Err(InputError::InvalidValue { field, .. }) => {
            assert_eq!(field, "constraints.aspectRatio")
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }

    assert_eq!(store.safe_frame_count(), 0);
}

#[test]
fn test_custom_banding_table() {
    let banding = LayerBanding::new(vec![
        LayerBound { layer: Layer::Background, min: 0 },
        LayerBound { layer: Layer::Content, min: 1 },
        LayerBound { layer: Layer::Overlay, min: 100 },
        LayerBound { layer: Layer::Modal, min: 200 },
        LayerBound { layer: Layer::Floating, min: 300 },
        LayerBound { layer: Layer::Notification, min: 400 },
    ])
    .unwrap();
    assert_eq!(banding.layer_for(250), Layer::Modal);
    assert_eq!(banding.layer_for(450), Layer::Notification);
    assert_eq!(banding.range_of(Layer::Floating), Some((300, Some(399))));
}

#[test]
fn test_banding_rejects_unordered_table() {
    let err = LayerBanding::new(vec![
        LayerBound { layer: Layer::Content, min: 10 },
        LayerBound { layer: Layer::Background, min: 0 },
    ]);
    assert!(err.is_err());
}
