//! Detection benchmarks.
//!
//! Benchmarks: raw two-sample tests and full sequential/parallel runs over
//! the reference dataset.
//! Run with: cargo bench -p driftwatch-analysis --bench detection_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use driftwatch_analysis::detection::{DistributionDrift, DriftRequest};
use driftwatch_analysis::stats::{ks_2samp, mann_whitney_u};
use driftwatch_core::events::NoOpHandler;
use driftwatch_fixtures::{generate_synthetic_data, reference_cutoffs};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

fn normal_sample(mean: f64, size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, 1.0).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

fn two_sample_tests(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_sample");

    for size in [1_000, 10_000, 100_000] {
        let x = normal_sample(0.0, size, 1);
        let y = normal_sample(0.1, size, 2);

        group.bench_with_input(BenchmarkId::new("mann_whitney", size), &size, |b, _| {
            b.iter(|| mann_whitney_u(&x, &y));
        });
        group.bench_with_input(BenchmarkId::new("ks", size), &size, |b, _| {
            b.iter(|| ks_2samp(&x, &y));
        });
    }
    group.finish();
}

fn detect_drift_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_drift");
    group.sample_size(10);

    let request = DriftRequest::new(&["numerical", "categorical"], "date", reference_cutoffs())
        .with_categorical_columns(&["categorical"]);

    for size in [1_000, 10_000] {
        let table = generate_synthetic_data(size, 99);
        for parallel in [false, true] {
            let detector = DistributionDrift::default().with_parallel(parallel);
            let label = if parallel { "parallel" } else { "sequential" };
            group.bench_with_input(BenchmarkId::new(label, size), &size, |b, _| {
                b.iter(|| detector.detect_drift(&table, &request, &NoOpHandler).unwrap());
            });
        }
    }
    group.finish();
}

criterion_group!(benches, two_sample_tests, detect_drift_runs);
criterion_main!(benches);
