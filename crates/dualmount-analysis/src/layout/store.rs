//! Layout contract store: three independent tables keyed by layout id.

use std::collections::BTreeMap;

use dualmount_core::errors::InputError;
use dualmount_core::events::LayoutTable;
use dualmount_core::{Environment, Layer, ProtectionLevel};

use super::banding::LayerBanding;
use super::types::{
    ContractRules, Dimensions, FrameConstraints, FramePosition, LayoutCondition, LayoutProtection,
    Overflow, Padding, Registration, SafeFrameShell, ZIndexContract,
};

/// Upper extent given to the open-ended top band when seeding defaults.
const SEED_TOP_BAND_SPAN: i64 = 99;

/// Contracts, safe-frame shells and protections.
///
/// Re-registering an id replaces the record and logs a warning. Iteration
/// is ordered by layout id.
#[derive(Debug, Clone, Default)]
pub struct LayoutContractStore {
    contracts: BTreeMap<String, ZIndexContract>,
    safe_frames: BTreeMap<String, SafeFrameShell>,
    protections: BTreeMap<String, LayoutProtection>,
}

impl LayoutContractStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one contract per band of `banding` plus the
    /// default modal and notification safe frames.
    pub fn with_default_contracts(banding: &LayerBanding) -> Self {
        let mut store = Self::new();
        store.seed_default_contracts(banding);
        store
    }

    /// Register one legacy contract per band, keyed by the layer name, and
    /// the default shells whose layer exists in `banding`.
    pub fn seed_default_contracts(&mut self, banding: &LayerBanding) {
        for bound in banding.bands() {
            let Some((min, max)) = seed_range(banding, bound.layer) else {
                continue;
            };
            let layer = bound.layer;
            let contract = ZIndexContract::new(layer.as_str(), min, layer, Environment::Legacy)
                .with_range(min, max)
                .with_condition(LayoutCondition {
                    feature: "layout".to_string(),
                    version: "1.0".to_string(),
                    screen: "all".to_string(),
                });
            self.contracts.insert(contract.layout_id.clone(), contract);
        }
        for shell in default_safe_frames(banding) {
            self.safe_frames.insert(shell.layout_id.clone(), shell);
        }
    }

    pub fn register_contract(
        &mut self,
        contract: ZIndexContract,
    ) -> Result<Registration, InputError> {
        contract.validate()?;
        let id = contract.layout_id.clone();
        let registration = insert_logged(&mut self.contracts, id, contract, LayoutTable::Contracts);
        Ok(registration)
    }

    pub fn register_safe_frame(
        &mut self,
        shell: SafeFrameShell,
    ) -> Result<Registration, InputError> {
        shell.validate()?;
        let id = shell.layout_id.clone();
        let registration = insert_logged(&mut self.safe_frames, id, shell, LayoutTable::SafeFrames);
        Ok(registration)
    }

    pub fn register_protection(
        &mut self,
        protection: LayoutProtection,
    ) -> Result<Registration, InputError> {
        InputError::require_non_blank("layout id", &protection.layout_id)?;
        let id = protection.layout_id.clone();
        let registration =
            insert_logged(&mut self.protections, id, protection, LayoutTable::Protections);
        Ok(registration)
    }

    pub fn contract(&self, layout_id: &str) -> Option<&ZIndexContract> {
        self.contracts.get(layout_id)
    }

    pub fn safe_frame(&self, layout_id: &str) -> Option<&SafeFrameShell> {
        self.safe_frames.get(layout_id)
    }

    pub fn protection(&self, layout_id: &str) -> Option<&LayoutProtection> {
        self.protections.get(layout_id)
    }

    /// Remove `layout_id` from every table. Returns the tables that held it;
    /// empty means nothing was removed.
    pub fn unregister(&mut self, layout_id: &str) -> Vec<LayoutTable> {
        let mut removed = Vec::new();
        if self.contracts.remove(layout_id).is_some() {
            removed.push(LayoutTable::Contracts);
        }
        if self.safe_frames.remove(layout_id).is_some() {
            removed.push(LayoutTable::SafeFrames);
        }
        if self.protections.remove(layout_id).is_some() {
            removed.push(LayoutTable::Protections);
        }
        removed
    }

    pub fn contracts(&self) -> impl Iterator<Item = &ZIndexContract> {
        self.contracts.values()
    }

    pub fn safe_frames(&self) -> impl Iterator<Item = &SafeFrameShell> {
        self.safe_frames.values()
    }

    pub fn protections(&self) -> impl Iterator<Item = &LayoutProtection> {
        self.protections.values()
    }

    pub fn contracts_for_environment(&self, environment: Environment) -> Vec<&ZIndexContract> {
        self.contracts
            .values()
            .filter(|c| c.environment == environment)
            .collect()
    }

    pub fn safe_frames_for_environment(&self, environment: Environment) -> Vec<&SafeFrameShell> {
        self.safe_frames
            .values()
            .filter(|s| s.environment == environment)
            .collect()
    }

    pub fn protections_for_level(&self, level: ProtectionLevel) -> Vec<&LayoutProtection> {
        self.protections
            .values()
            .filter(|p| p.level == level)
            .collect()
    }

    pub fn contract_count(&self) -> usize {
        self.contracts.len()
    }

    pub fn safe_frame_count(&self) -> usize {
        self.safe_frames.len()
    }

    pub fn protection_count(&self) -> usize {
        self.protections.len()
    }
}

/// Closed range a seeded record for `layer` covers. The open-ended top band
/// is capped at `min + SEED_TOP_BAND_SPAN`.
fn seed_range(banding: &LayerBanding, layer: Layer) -> Option<(i64, i64)> {
    let (min, max) = banding.range_of(layer)?;
    Some((min, max.unwrap_or_else(|| min.saturating_add(SEED_TOP_BAND_SPAN))))
}

/// `modal-container` and `notification-container`, placed at the bottom of
/// their band.
fn default_safe_frames(banding: &LayerBanding) -> Vec<SafeFrameShell> {
    let templates = [
        (
            "modal-container",
            Layer::Modal,
            FramePosition::Center,
            (300.0, 400.0),
            padding(20.0, 20.0),
            (200.0, 400.0, 100.0, 600.0),
        ),
        (
            "notification-container",
            Layer::Notification,
            FramePosition::Top,
            (350.0, 80.0),
            padding(10.0, 15.0),
            (250.0, 400.0, 60.0, 120.0),
        ),
    ];

    templates
        .into_iter()
        .filter_map(|(layout_id, layer, position, (width, height), frame_padding, bounds)| {
            let (min, max) = seed_range(banding, layer)?;
            let (min_width, max_width, min_height, max_height) = bounds;
            Some(SafeFrameShell {
                layout_id: layout_id.to_string(),
                dimensions: Dimensions { width, height },
                position,
                z_index: min,
                environment: Environment::Legacy,
                padding: frame_padding,
                constraints: FrameConstraints {
                    min_width: Some(min_width),
                    max_width: Some(max_width),
                    min_height: Some(min_height),
                    max_height: Some(max_height),
                    aspect_ratio: None,
                    overflow: Overflow::Hidden,
                },
                rules: ContractRules {
                    min_z_index: min,
                    max_z_index: max,
                    allowed_layers: vec![layer],
                    conflicts: Vec::new(),
                },
            })
        })
        .collect()
}

fn padding(vertical: f64, horizontal: f64) -> Padding {
    Padding {
        top: vertical,
        bottom: vertical,
        left: horizontal,
        right: horizontal,
    }
}

fn insert_logged<T>(
    table: &mut BTreeMap<String, T>,
    layout_id: String,
    record: T,
    kind: LayoutTable,
) -> Registration {
    match table.insert(layout_id.clone(), record) {
        Some(_) => {
            tracing::warn!(
                layout_id = %layout_id,
                table = ?kind,
                "layout already registered, replacing"
            );
            Registration::Replaced
        }
        None => {
            tracing::info!(layout_id = %layout_id, table = ?kind, "layout registered");
            Registration::Inserted
        }
    }
}
