//! Two-sample statistical tests backing the drift verdicts.
//!
//! Each test returns a [`TestOutcome`]; interpreting the p-value against a
//! significance level is left to the caller.

pub mod kolmogorov_smirnov;
pub mod mann_whitney;
pub mod power_divergence;
pub mod types;

pub use kolmogorov_smirnov::ks_2samp;
pub use mann_whitney::mann_whitney_u;
pub use power_divergence::power_divergence;
pub use types::TestOutcome;
