use criterion::{black_box, criterion_group, criterion_main, Criterion};

use markboard_core::model::Thresholds;
use markboard_core::statistics::compute;

fn roster(size: usize) -> Vec<f64> {
    (0..size).map(|i| ((i * 37) % 101) as f64).collect()
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    let thresholds = Thresholds::default();

    group.bench_function("classroom_30", |b| {
        let scores = roster(30);
        b.iter(|| compute(black_box(&scores), black_box(&thresholds)))
    });

    group.bench_function("cohort_500", |b| {
        let scores = roster(500);
        b.iter(|| compute(black_box(&scores), black_box(&thresholds)))
    });

    group.bench_function("empty", |b| {
        b.iter(|| compute(black_box(&[]), black_box(&thresholds)))
    });

    group.finish();
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
