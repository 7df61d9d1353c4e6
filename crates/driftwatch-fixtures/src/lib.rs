//! Seeded synthetic tables for driftwatch tests and benchmarks.
//!
//! The reference dataset has four yearly periods (2017–2020) with a
//! `date` timestamp column, a `numerical` feature whose spread and then mean
//! shift over time, and a `categorical` feature whose proportions shift and
//! which gains a new category in the last period.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use driftwatch_analysis::table::{Column, Table};
use rand::distributions::WeightedIndex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// Generating distributions for one yearly period.
#[derive(Debug, Clone, Copy)]
pub struct PeriodSpec {
    pub year: i32,
    pub mean: f64,
    pub std_dev: f64,
    /// `(category, probability)` pairs.
    pub categories: &'static [(&'static str, f64)],
}

/// The four reference periods.
///
/// - 2017 → 2018: practically unchanged
/// - 2018 → 2019: spread doubles, category `1` gains share
/// - 2019 → 2020: mean shifts by one, category `2` appears
pub const REFERENCE_PERIODS: [PeriodSpec; 4] = [
    PeriodSpec {
        year: 2017,
        mean: 0.0,
        std_dev: 1.0,
        categories: &[("0", 0.8), ("1", 0.2)],
    },
    PeriodSpec {
        year: 2018,
        mean: 0.0,
        std_dev: 1.01,
        categories: &[("0", 0.801), ("1", 0.199)],
    },
    PeriodSpec {
        year: 2019,
        mean: 0.0,
        std_dev: 2.0,
        categories: &[("0", 0.7), ("1", 0.3)],
    },
    PeriodSpec {
        year: 2020,
        mean: 1.0,
        std_dev: 2.0,
        categories: &[("0", 0.5), ("1", 0.3), ("2", 0.2)],
    },
];

/// Midnight on January 1st of `year`.
pub fn year_start(year: i32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_else(|| panic!("invalid year {year}"))
}

/// Yearly cutoffs closing each reference period: 2018-01-01 through 2021-01-01.
pub fn reference_cutoffs() -> Vec<NaiveDateTime> {
    REFERENCE_PERIODS
        .iter()
        .map(|period| year_start(period.year + 1))
        .collect()
}

/// `size` timestamps drawn uniformly from `[start, end)`, at second resolution.
pub fn random_dates<R: Rng>(
    rng: &mut R,
    start: NaiveDateTime,
    end: NaiveDateTime,
    size: usize,
) -> Vec<NaiveDateTime> {
    let span = (end - start).num_seconds().max(1);
    (0..size)
        .map(|_| start + Duration::seconds(rng.gen_range(0..span)))
        .collect()
}

/// Reference dataset with `size` rows per period, rows shuffled.
pub fn generate_synthetic_data(size: usize, seed: u64) -> Table {
    generate_from_periods(&REFERENCE_PERIODS, size, seed)
}

/// Dataset with `size` rows per period drawn from `periods`, rows shuffled.
pub fn generate_from_periods(periods: &[PeriodSpec], size: usize, seed: u64) -> Table {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut dates = Vec::with_capacity(periods.len() * size);
    let mut numerical = Vec::with_capacity(periods.len() * size);
    let mut categorical = Vec::with_capacity(periods.len() * size);

    for period in periods {
        let normal = Normal::new(period.mean, period.std_dev)
            .unwrap_or_else(|e| panic!("invalid normal for {}: {e}", period.year));
        let weights = WeightedIndex::new(period.categories.iter().map(|(_, p)| *p))
            .unwrap_or_else(|e| panic!("invalid weights for {}: {e}", period.year));

        dates.extend(random_dates(
            &mut rng,
            year_start(period.year),
            year_start(period.year + 1),
            size,
        ));
        numerical.extend((0..size).map(|_| Some(normal.sample(&mut rng))));
        categorical.extend(
            (0..size).map(|_| Some(period.categories[weights.sample(&mut rng)].0.to_string())),
        );
    }

    let mut order: Vec<usize> = (0..dates.len()).collect();
    order.shuffle(&mut rng);

    let table = Table::new()
        .with_column("date", Column::Timestamp(dates))
        .and_then(|t| t.with_column("numerical", Column::Numeric(numerical)))
        .and_then(|t| t.with_column("categorical", Column::Categorical(categorical)))
        .unwrap_or_else(|e| panic!("synthetic table is malformed: {e}"));
    table.take(&order)
}
