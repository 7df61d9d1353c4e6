//! Minimal columnar table: named, equal-length columns with
//! order-preserving row selection.

pub mod column;
pub mod frame;

pub use column::Column;
pub use frame::Table;
