//! DriftEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for handling detection events.
///
/// Handlers only override the events they care about. `Send + Sync` so a
/// handler can be shared with callers running detections on other threads.
pub trait DriftEventHandler: Send + Sync {
    fn on_detection_started(&self, _event: &DetectionStartedEvent) {}
    fn on_drift_detected(&self, _event: &DriftDetectedEvent) {}
    fn on_detection_complete(&self, _event: &DetectionCompleteEvent) {}
}

/// Handler that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl DriftEventHandler for NoOpHandler {}
