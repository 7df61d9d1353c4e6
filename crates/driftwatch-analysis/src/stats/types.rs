//! Shared result type for statistical tests.

use serde::{Deserialize, Serialize};

/// Test statistic and p-value of a two-sample test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub statistic: f64,
    pub p_value: f64,
}

impl TestOutcome {
    /// Outcome used when the test cannot distinguish the samples at all.
    pub fn indistinguishable(statistic: f64) -> Self {
        Self {
            statistic,
            p_value: 1.0,
        }
    }

    /// Whether `p_value` is strictly below `significance`.
    pub fn is_significant(&self, significance: f64) -> bool {
        self.p_value < significance
    }
}
