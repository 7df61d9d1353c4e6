//! Event payload types.

use crate::types::Timestamp;

/// Payload for `on_detection_started`.
#[derive(Debug, Clone)]
pub struct DetectionStartedEvent {
    pub period_pairs: usize,
    pub features: usize,
}

/// Payload for `on_drift_detected`.
#[derive(Debug, Clone)]
pub struct DriftDetectedEvent {
    pub feature: String,
    /// Boundary between the two compared periods.
    pub time_cutoff: Timestamp,
    /// Cutoff closing the later period.
    pub window_end: Timestamp,
    pub test: &'static str,
    pub statistic: f64,
    pub p_value: f64,
}

impl DriftDetectedEvent {
    /// Human-readable, line-oriented notice for this drift event.
    pub fn notice(&self) -> String {
        format!(
            "Drift detected in feature {} before and after {}",
            self.feature, self.time_cutoff
        )
    }
}

/// Payload for `on_detection_complete`.
#[derive(Debug, Clone)]
pub struct DetectionCompleteEvent {
    pub comparisons: usize,
    pub alerts: usize,
    pub duration_ms: u64,
}
