//! GovernanceEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing governance events.
///
/// Handlers only override the events they care about. `Send + Sync` lets a
/// host share one handler between engines living on different threads.
pub trait GovernanceEventHandler: Send + Sync {
    // ---- Role analysis ----
    fn on_analysis_complete(&self, _event: &AnalysisCompleteEvent) {}
    fn on_conflict_detected(&self, _event: &ConflictDetectedEvent) {}

    // ---- Layout registry ----
    fn on_layout_registered(&self, _event: &LayoutRegisteredEvent) {}
    fn on_layout_unregistered(&self, _event: &LayoutUnregisteredEvent) {}

    // ---- Layout validation ----
    fn on_layout_validated(&self, _event: &LayoutValidatedEvent) {}

    // ---- Batches ----
    fn on_batch_item_failed(&self, _event: &BatchItemFailedEvent) {}
}
