//! Distribution drift detection over time-bucketed tables.
//!
//! - [`table`]: minimal columnar table with order-preserving row access
//! - [`selection`]: splits a table into consecutive time periods
//! - [`stats`]: two-sample tests (Mann-Whitney U, Kolmogorov-Smirnov, power divergence)
//! - [`detection`]: drift verdicts per feature and across period pairs

pub mod detection;
pub mod selection;
pub mod stats;
pub mod table;
