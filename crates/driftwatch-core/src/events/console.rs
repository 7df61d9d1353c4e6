//! Console sink printing one notice line per drift event.

use super::handler::DriftEventHandler;
use super::types::DriftDetectedEvent;

/// Prints `Drift detected in feature <feature> before and after <cutoff>`
/// to stdout for every detected drift.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl DriftEventHandler for ConsoleNotifier {
    fn on_drift_detected(&self, event: &DriftDetectedEvent) {
        println!("{}", event.notice());
    }
}
