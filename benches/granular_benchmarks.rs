// Benchmarking coverage scoring
// and the granule search
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use granular::coverage::coverage;
use granular::data::SampleSeries;
use granular::GranuleOptimizer;
use std::time::Duration;

// data generating
// functions
mod utils;
use utils::prediction_pair;

pub fn coverage_benchmarks(c: &mut Criterion) {
    let (y_true, y_pred) = prediction_pair(10_000);
    let series = SampleSeries::new(&y_true, &y_pred).unwrap();
    let alphas: Vec<f64> = (1..=10).map(|i| i as f64 * 0.3).collect();
    let betas: Vec<f64> = (1..=10).map(|i| i as f64 * 0.5).collect();

    c.bench_function("coverage_sequential", |b| {
        b.iter(|| coverage(black_box(&series), black_box(&alphas), black_box(&betas), false))
    });
    c.bench_function("coverage_parallel", |b| {
        b.iter(|| coverage(black_box(&series), black_box(&alphas), black_box(&betas), true))
    });
}

pub fn granule_benchmarks(c: &mut Criterion) {
    let (y_true, y_pred) = prediction_pair(1_000);

    let mut group = c.benchmark_group("granule_optimizer");
    group.measurement_time(Duration::from_secs(30));
    group.sample_size(10);
    group.bench_function("optimize_1000_iterations", |b| {
        b.iter(|| {
            let optimizer = GranuleOptimizer::default().set_iterations(1_000).set_parallel(false);
            optimizer.optimize(black_box(&y_pred), black_box(&y_true)).unwrap()
        })
    });
    group.finish();
}

criterion_group!(benches, coverage_benchmarks, granule_benchmarks);
criterion_main!(benches);
