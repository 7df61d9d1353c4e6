//! Configuration system for driftwatch.
//! TOML-based, layered resolution: overrides > env > project > defaults.

pub mod detection_config;
pub mod driftwatch_config;
pub mod selection_config;

pub use detection_config::DetectionConfig;
pub use driftwatch_config::{ConfigOverrides, DriftwatchConfig};
pub use selection_config::SelectionConfig;
