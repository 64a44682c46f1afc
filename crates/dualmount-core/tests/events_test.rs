//! Tests for the event dispatcher.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use dualmount_core::events::{
    AnalysisCompleteEvent, BatchItemFailedEvent, EventDispatcher, GovernanceEventHandler,
    LayoutRegisteredEvent, LayoutTable,
};
use dualmount_core::Environment;

#[derive(Default)]
struct Recorder {
    completed: Mutex<Vec<String>>,
    registered: AtomicUsize,
}

impl GovernanceEventHandler for Recorder {
    fn on_analysis_complete(&self, event: &AnalysisCompleteEvent) {
        self.completed.lock().unwrap().push(event.component_name.clone());
    }

    fn on_layout_registered(&self, _event: &LayoutRegisteredEvent) {
        self.registered.fetch_add(1, Ordering::SeqCst);
    }
}

struct Panicker;

impl GovernanceEventHandler for Panicker {
    fn on_analysis_complete(&self, _event: &AnalysisCompleteEvent) {
        panic!("handler failure");
    }
}

fn complete(name: &str) -> AnalysisCompleteEvent {
    AnalysisCompleteEvent {
        component_name: name.to_string(),
        environment: Environment::Legacy,
        score: 90.0,
        assignment_count: 1,
        conflict_count: 0,
        missing_role_count: 0,
    }
}

#[test]
fn test_empty_dispatcher_is_noop() {
    let dispatcher = EventDispatcher::new();
    assert_eq!(dispatcher.handler_count(), 0);
    dispatcher.emit_analysis_complete(&complete("Header"));
}

#[test]
fn test_handlers_receive_events_in_order() {
    let recorder = Arc::new(Recorder::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(recorder.clone());

    dispatcher.emit_analysis_complete(&complete("Header"));
    dispatcher.emit_analysis_complete(&complete("Footer"));
    dispatcher.emit_layout_registered(&LayoutRegisteredEvent {
        layout_id: "toast-layer".to_string(),
        table: LayoutTable::Contracts,
        replaced: false,
    });

    assert_eq!(*recorder.completed.lock().unwrap(), vec!["Header", "Footer"]);
    assert_eq!(recorder.registered.load(Ordering::SeqCst), 1);
}

#[test]
fn test_unhandled_events_use_noop_defaults() {
    let recorder = Arc::new(Recorder::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(recorder.clone());

    dispatcher.emit_batch_item_failed(&BatchItemFailedEvent {
        index: 2,
        item: "Broken".to_string(),
        error: "component name must not be empty".to_string(),
    });
    assert!(recorder.completed.lock().unwrap().is_empty());
}

#[test]
fn test_panicking_handler_does_not_block_others() {
    let recorder = Arc::new(Recorder::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(Panicker));
    dispatcher.register(recorder.clone());

    dispatcher.emit_analysis_complete(&complete("Header"));

    assert_eq!(dispatcher.handler_count(), 2);
    assert_eq!(*recorder.completed.lock().unwrap(), vec!["Header"]);
}
