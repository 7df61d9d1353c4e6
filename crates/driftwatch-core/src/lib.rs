//! Core types, errors, configuration, events, and tracing for driftwatch.
//!
//! Everything here is shared by the analysis crate; nothing here performs a
//! statistical comparison.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;
