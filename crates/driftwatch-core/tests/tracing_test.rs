//! Tests for tracing initialization.

use driftwatch_core::tracing::init_tracing;

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    ::tracing::info!(target: "driftwatch_core", "tracing initialized twice without panicking");
}
