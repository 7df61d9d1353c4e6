//! Shared data types for driftwatch.

pub mod timestamp;

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use timestamp::{parse_timestamp, Timestamp};

/// Inline storage for the handful of value columns a selector usually holds.
pub type SmallVec4<T> = SmallVec<[T; 4]>;
