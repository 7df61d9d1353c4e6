//! Event system for driftwatch.
//! Trait with no-op defaults, synchronous dispatch from the calling thread.

pub mod console;
pub mod handler;
pub mod types;

pub use console::ConsoleNotifier;
pub use handler::{DriftEventHandler, NoOpHandler};
pub use types::{DetectionCompleteEvent, DetectionStartedEvent, DriftDetectedEvent};
