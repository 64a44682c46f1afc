//! Tests for tracing initialization.

use dualmount_core::tracing::init_tracing;

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    tracing::info!(component = "Header", "logging after init");
}
