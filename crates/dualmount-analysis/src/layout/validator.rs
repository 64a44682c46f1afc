//! Layout validator: checks a z-index against a layout's contract and
//! escalates under critical protection.

use dualmount_core::errors::InputError;
use dualmount_core::ProtectionLevel;

use super::banding::LayerBanding;
use super::constraints::check_safe_frame;
use super::store::LayoutContractStore;
use super::types::{
    LayoutSummary, LayoutValidationResult, LayoutViolation, ValidatedLayout, ViolationKind,
    ViolationSeverity, ViolationValue,
};

/// Error added when a critically protected layout has any violation.
pub const CRITICAL_ESCALATION_MESSAGE: &str = "critical layout has validation violations";

/// Role passed when every contract is validated at its own z-index.
const CONTRACT_SWEEP_ROLE: &str = "container";

/// Read-only view over the store and banding table.
pub struct LayoutValidator<'a> {
    store: &'a LayoutContractStore,
    banding: &'a LayerBanding,
    warn_unregistered: bool,
}

impl<'a> LayoutValidator<'a> {
    pub fn new(
        store: &'a LayoutContractStore,
        banding: &'a LayerBanding,
        warn_unregistered: bool,
    ) -> Self {
        Self {
            store,
            banding,
            warn_unregistered,
        }
    }

    /// Validate `z_index` for `layout_id`.
    ///
    /// With a contract, a z-index outside `[minZIndex, maxZIndex]` is an error
    /// and a layer mismatch is a warning. Without one, the resolved band is
    /// reported as a warning at most; there is no baseline to fail against.
    /// A critical protection then adds one extra error if the contract
    /// checks found anything. The unregistered note never escalates.
    pub fn validate(
        &self,
        layout_id: &str,
        role: &str,
        z_index: i64,
    ) -> Result<LayoutValidationResult, InputError> {
        InputError::require_non_blank("layout id", layout_id)?;
        InputError::require_non_blank("role", role)?;

        let mut result = LayoutValidationResult::default();
        let resolved = self.banding.layer_for(z_index);
        let contract = self.store.contract(layout_id);

        match contract {
            Some(contract) => {
                let rules = &contract.rules;
                if !rules.contains(z_index) {
                    result.push(LayoutViolation {
                        kind: ViolationKind::ZIndex,
                        severity: ViolationSeverity::Error,
                        message: format!(
                            "Z-index {z_index} is outside allowed range [{}, {}]",
                            rules.min_z_index, rules.max_z_index
                        ),
                        layout_id: layout_id.to_string(),
                        expected: ViolationValue::Range {
                            min: rules.min_z_index,
                            max: rules.max_z_index,
                        },
                        actual: ViolationValue::ZIndex(z_index),
                    });
                }
                if contract.layer != resolved {
                    result.push(LayoutViolation {
                        kind: ViolationKind::Layer,
                        severity: ViolationSeverity::Warning,
                        message: format!(
                            "Layer mismatch: expected {resolved}, got {}",
                            contract.layer
                        ),
                        layout_id: layout_id.to_string(),
                        expected: ViolationValue::Layer(resolved),
                        actual: ViolationValue::Layer(contract.layer),
                    });
                }
            }
            None if self.warn_unregistered => {
                result.push(LayoutViolation {
                    kind: ViolationKind::Layer,
                    severity: ViolationSeverity::Warning,
                    message: format!(
                        "No contract registered for {layout_id}; \
                         z-index {z_index} resolves to layer {resolved}"
                    ),
                    layout_id: layout_id.to_string(),
                    expected: ViolationValue::Unregistered,
                    actual: ViolationValue::Layer(resolved),
                });
            }
            None => {}
        }

        if contract.is_some() && !result.violations.is_empty() && self.is_critical(layout_id) {
            result.errors.push(CRITICAL_ESCALATION_MESSAGE.to_string());
        }

        tracing::debug!(
            layout_id,
            role,
            z_index,
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "layout validated"
        );
        Ok(result.finish())
    }

    /// Validate every registered contract at its own declared z-index.
    pub fn validate_all(&self) -> Vec<ValidatedLayout> {
        self.store
            .contracts()
            .filter_map(|contract| {
                match self.validate(&contract.layout_id, CONTRACT_SWEEP_ROLE, contract.z_index) {
                    Ok(result) => Some(ValidatedLayout {
                        layout_id: contract.layout_id.clone(),
                        z_index: contract.z_index,
                        result,
                    }),
                    Err(e) => {
                        tracing::warn!(
                            layout_id = %contract.layout_id,
                            error = %e,
                            "stored contract could not be validated, skipping"
                        );
                        None
                    }
                }
            })
            .collect()
    }

    /// Constraint checks for a registered safe frame; `None` if there is none.
    /// Critical protection escalates here the same way as in `validate`.
    pub fn validate_safe_frame(&self, layout_id: &str) -> Option<LayoutValidationResult> {
        let shell = self.store.safe_frame(layout_id)?;
        let mut result = check_safe_frame(shell, self.banding);
        if !result.violations.is_empty() && self.is_critical(layout_id) {
            result.errors.push(CRITICAL_ESCALATION_MESSAGE.to_string());
        }
        Some(result.finish())
    }

    pub fn summary(&self) -> LayoutSummary {
        let validation_errors = self
            .validate_all()
            .iter()
            .map(|v| v.result.errors.len())
            .sum();
        LayoutSummary {
            total_contracts: self.store.contract_count(),
            total_safe_frames: self.store.safe_frame_count(),
            total_protections: self.store.protection_count(),
            critical_protections: self
                .store
                .protections_for_level(ProtectionLevel::Critical)
                .len(),
            validation_errors,
        }
    }

    fn is_critical(&self, layout_id: &str) -> bool {
        self.store
            .protection(layout_id)
            .is_some_and(|p| p.level == ProtectionLevel::Critical)
    }
}
