//! Time-based selection: validated cutoffs and period splitting.

pub mod time_based;

pub use time_based::{PeriodPair, TimeBasedSelector};
