//! DistributionDrift: per-feature drift verdicts and the time-windowed run
//! over a whole table.

use std::time::Instant;

use driftwatch_core::config::{DetectionConfig, DriftwatchConfig};
use driftwatch_core::constants::DEFAULT_SIGNIFICANCE;
use driftwatch_core::errors::{DetectionError, DriftError};
use driftwatch_core::events::{
    DetectionCompleteEvent, DetectionStartedEvent, DriftDetectedEvent, DriftEventHandler,
};
use driftwatch_core::types::{parse_timestamp, Timestamp};
use rayon::prelude::*;

use super::categorical::{deprecated_categories, evaluate_categorical, new_categories};
use super::numerical::evaluate_numerical;
use super::types::{
    CategoricalTest, CategoryChange, ComparisonOutcome, DetectionRun, DriftAlert, FeatureKind,
    FeatureSample, NumericalTest, TestSelection,
};
use crate::selection::{PeriodPair, TimeBasedSelector};
use crate::table::Table;

/// What to compare in a [`DistributionDrift::detect_drift`] run.
#[derive(Debug, Clone)]
pub struct DriftRequest {
    pub feature_names: Vec<String>,
    pub splitting_column_name: String,
    pub time_cutoffs: Vec<Timestamp>,
    /// Features compared as categorical; all others are numerical.
    pub categorical_columns: Vec<String>,
    pub tests: TestSelection,
}

impl DriftRequest {
    pub fn new<S: AsRef<str>>(
        feature_names: &[S],
        splitting_column_name: &str,
        time_cutoffs: Vec<Timestamp>,
    ) -> Self {
        Self {
            feature_names: feature_names.iter().map(|f| f.as_ref().to_string()).collect(),
            splitting_column_name: splitting_column_name.to_string(),
            time_cutoffs,
            categorical_columns: Vec::new(),
            tests: TestSelection::default(),
        }
    }

    pub fn with_categorical_columns<S: AsRef<str>>(mut self, columns: &[S]) -> Self {
        self.categorical_columns = columns.iter().map(|c| c.as_ref().to_string()).collect();
        self
    }

    pub fn with_numerical_test(mut self, test: NumericalTest) -> Self {
        self.tests.numerical = test;
        self
    }

    pub fn with_categorical_test(mut self, test: CategoricalTest) -> Self {
        self.tests.categorical = test;
        self
    }

    /// Build a request from a loaded configuration.
    ///
    /// Test identifiers and cutoffs are validated here, before any data is
    /// touched.
    pub fn from_config(config: &DriftwatchConfig) -> Result<Self, DriftError> {
        let cutoffs = config
            .selection
            .time_cutoffs
            .iter()
            .map(|c| parse_timestamp(c))
            .collect::<Result<Vec<_>, _>>()?;
        let numerical: NumericalTest = config.detection.effective_numerical_test().parse()?;
        let categorical: CategoricalTest = config.detection.effective_categorical_test().parse()?;

        Ok(Self::new(
            &config.selection.value_columns,
            config.selection.effective_splitting_column(),
            cutoffs,
        )
        .with_categorical_columns(&config.detection.categorical_columns)
        .with_numerical_test(numerical)
        .with_categorical_test(categorical))
    }

    /// Kind of `feature` as declared by this request.
    pub fn kind_of(&self, feature: &str) -> FeatureKind {
        if self.categorical_columns.iter().any(|c| c == feature) {
            FeatureKind::Categorical
        } else {
            FeatureKind::Numerical
        }
    }
}

/// Detects distribution drift between samples at a fixed significance.
#[derive(Debug, Clone)]
pub struct DistributionDrift {
    significance: f64,
    parallel: bool,
}

impl Default for DistributionDrift {
    fn default() -> Self {
        Self {
            significance: DEFAULT_SIGNIFICANCE,
            parallel: false,
        }
    }
}

/// One evaluated (period pair, feature) cell of a run.
struct FeatureComparison<'a> {
    pair: &'a PeriodPair,
    feature: &'a str,
    kind: FeatureKind,
    outcome: ComparisonOutcome,
    category_change: Option<(Vec<String>, Vec<String>)>,
}

impl DistributionDrift {
    /// `significance` must lie strictly between 0 and 1.
    pub fn new(significance: f64) -> Result<Self, DetectionError> {
        if !(significance > 0.0 && significance < 1.0) {
            return Err(DetectionError::InvalidSignificance(significance));
        }
        Ok(Self {
            significance,
            parallel: false,
        })
    }

    pub fn from_config(config: &DetectionConfig) -> Result<Self, DetectionError> {
        Ok(Self::new(config.effective_significance())?.with_parallel(config.effective_parallel()))
    }

    /// Evaluate (period pair, feature) cells on the rayon pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn significance(&self) -> f64 {
        self.significance
    }

    pub fn compare_two_numerical_distributions(
        &self,
        baseline: &[f64],
        new: &[f64],
        test: NumericalTest,
    ) -> Result<bool, DetectionError> {
        super::numerical::compare_two_numerical_distributions(baseline, new, test, self.significance)
    }

    pub fn compare_two_categorical_distributions(
        &self,
        baseline: &[Option<String>],
        new: &[Option<String>],
        test: CategoricalTest,
    ) -> Result<bool, DetectionError> {
        super::categorical::compare_two_categorical_distributions(
            baseline,
            new,
            test,
            self.significance,
        )
    }

    /// Compare two samples of one feature with the test matching their kind.
    pub fn evaluate(
        &self,
        baseline: &FeatureSample,
        new: &FeatureSample,
        tests: TestSelection,
    ) -> Result<ComparisonOutcome, DetectionError> {
        match (baseline, new) {
            (FeatureSample::Numerical(b), FeatureSample::Numerical(n)) => {
                let outcome = evaluate_numerical(b, n, tests.numerical)?;
                Ok(ComparisonOutcome::from_test(
                    tests.numerical.name(),
                    outcome,
                    self.significance,
                ))
            }
            (FeatureSample::Categorical(b), FeatureSample::Categorical(n)) => {
                let outcome = evaluate_categorical(b, n, tests.categorical, self.significance)?;
                Ok(ComparisonOutcome::from_test(
                    tests.categorical.name(),
                    outcome,
                    self.significance,
                ))
            }
            (b, n) => Err(DetectionError::MismatchedFeatureKinds {
                baseline: b.kind().name(),
                new: n.kind().name(),
            }),
        }
    }

    /// Drift verdict for one feature.
    pub fn detect_single_drift(
        &self,
        baseline: &FeatureSample,
        new: &FeatureSample,
        tests: TestSelection,
    ) -> Result<bool, DetectionError> {
        Ok(self.evaluate(baseline, new, tests)?.drifted)
    }

    /// Split `table` by the request's cutoffs and compare every feature
    /// across every pair of consecutive periods.
    ///
    /// The first failing comparison aborts the run.
    pub fn detect_drift(
        &self,
        table: &Table,
        request: &DriftRequest,
        handler: &dyn DriftEventHandler,
    ) -> Result<DetectionRun, DriftError> {
        let started = Instant::now();
        let selector = TimeBasedSelector::new(
            request.time_cutoffs.clone(),
            &request.feature_names,
            &request.splitting_column_name,
        )?;
        let pairs = selector.split_dataframe(table)?;

        handler.on_detection_started(&DetectionStartedEvent {
            period_pairs: pairs.len(),
            features: request.feature_names.len(),
        });

        let cells: Vec<(&PeriodPair, &str)> = pairs
            .iter()
            .flat_map(|pair| request.feature_names.iter().map(move |f| (pair, f.as_str())))
            .collect();

        // Verdicts are collected in cell order either way; events and alerts
        // are emitted afterwards on this thread.
        let comparisons: Vec<FeatureComparison<'_>> = if self.parallel {
            cells
                .par_iter()
                .map(|&(pair, feature)| {
                    self.compare_cell(pair, feature, request.kind_of(feature), request.tests)
                })
                .collect::<Result<_, _>>()?
        } else {
            cells
                .iter()
                .map(|&(pair, feature)| {
                    self.compare_cell(pair, feature, request.kind_of(feature), request.tests)
                })
                .collect::<Result<_, _>>()?
        };

        let mut run = DetectionRun {
            comparisons: comparisons.len(),
            ..DetectionRun::default()
        };
        for comparison in comparisons {
            self.record(&mut run, comparison, handler);
        }

        let duration_ms = started.elapsed().as_millis() as u64;
        tracing::info!(
            period_pairs = pairs.len(),
            comparisons = run.comparisons,
            alerts = run.alert_count(),
            duration_ms,
            "drift detection complete"
        );
        handler.on_detection_complete(&DetectionCompleteEvent {
            comparisons: run.comparisons,
            alerts: run.alert_count(),
            duration_ms,
        });

        Ok(run)
    }

    fn compare_cell<'a>(
        &self,
        pair: &'a PeriodPair,
        feature: &'a str,
        kind: FeatureKind,
        tests: TestSelection,
    ) -> Result<FeatureComparison<'a>, DriftError> {
        let baseline = FeatureSample::from_column(feature, pair.baseline.column(feature)?, kind)?;
        let new = FeatureSample::from_column(feature, pair.new.column(feature)?, kind)?;

        let outcome = self
            .evaluate(&baseline, &new, tests)
            .map_err(|source| DriftError::Feature {
                feature: feature.to_string(),
                source,
            })?;

        let category_change = match (&baseline, &new) {
            (FeatureSample::Categorical(b), FeatureSample::Categorical(n)) => {
                Some((new_categories(b, n), deprecated_categories(b, n)))
            }
            _ => None,
        };

        tracing::debug!(
            feature,
            cutoff = %pair.time_cutoff,
            kind = kind.name(),
            test = outcome.test,
            statistic = outcome.statistic,
            p_value = outcome.p_value,
            drifted = outcome.drifted,
            "compared periods"
        );

        Ok(FeatureComparison {
            pair,
            feature,
            kind,
            outcome,
            category_change,
        })
    }

    fn record(
        &self,
        run: &mut DetectionRun,
        comparison: FeatureComparison<'_>,
        handler: &dyn DriftEventHandler,
    ) {
        let FeatureComparison {
            pair,
            feature,
            kind,
            outcome,
            category_change,
        } = comparison;

        if let Some((new_categories, deprecated_categories)) = category_change {
            if !new_categories.is_empty() || !deprecated_categories.is_empty() {
                tracing::info!(
                    feature,
                    cutoff = %pair.time_cutoff,
                    new = ?new_categories,
                    deprecated = ?deprecated_categories,
                    "category set changed"
                );
                run.category_changes.push(CategoryChange {
                    feature: feature.to_string(),
                    time_cutoff: pair.time_cutoff,
                    new_categories,
                    deprecated_categories,
                });
            }
        }

        if !outcome.drifted {
            return;
        }

        let event = DriftDetectedEvent {
            feature: feature.to_string(),
            time_cutoff: pair.time_cutoff,
            window_end: pair.window_end,
            test: outcome.test,
            statistic: outcome.statistic,
            p_value: outcome.p_value,
        };
        tracing::info!(
            feature,
            cutoff = %pair.time_cutoff,
            p_value = outcome.p_value,
            "{}",
            event.notice()
        );
        handler.on_drift_detected(&event);

        run.alerts.push(DriftAlert {
            feature: event.feature,
            time_cutoff: pair.time_cutoff,
            window_end: pair.window_end,
            kind,
            test: outcome.test,
            statistic: outcome.statistic,
            p_value: outcome.p_value,
        });
    }
}
