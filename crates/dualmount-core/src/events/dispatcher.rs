//! EventDispatcher: synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::GovernanceEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Default, Clone)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn GovernanceEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn GovernanceEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler is logged and skipped; later handlers still run.
    fn emit<F: Fn(&dyn GovernanceEventHandler)>(&self, event_name: &'static str, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                ::tracing::warn!(event = event_name, "event handler panicked");
            }
        }
    }

    // ---- Role analysis ----
    pub fn emit_analysis_complete(&self, event: &AnalysisCompleteEvent) {
        self.emit("analysis_complete", |h| h.on_analysis_complete(event));
    }

    pub fn emit_conflict_detected(&self, event: &ConflictDetectedEvent) {
        self.emit("conflict_detected", |h| h.on_conflict_detected(event));
    }

    // ---- Layout registry ----
    pub fn emit_layout_registered(&self, event: &LayoutRegisteredEvent) {
        self.emit("layout_registered", |h| h.on_layout_registered(event));
    }

    pub fn emit_layout_unregistered(&self, event: &LayoutUnregisteredEvent) {
        self.emit("layout_unregistered", |h| h.on_layout_unregistered(event));
    }

    // ---- Layout validation ----
    pub fn emit_layout_validated(&self, event: &LayoutValidatedEvent) {
        self.emit("layout_validated", |h| h.on_layout_validated(event));
    }

    // ---- Batches ----
    pub fn emit_batch_item_failed(&self, event: &BatchItemFailedEvent) {
        self.emit("batch_item_failed", |h| h.on_batch_item_failed(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
