use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use parfact::factorial::{ParallelProductReducer, Strategy};
use std::hint::black_box;
use std::time::Duration;

/// Factorial arguments large enough for partitioning to matter
const SIZES: [u64; 3] = [1_000, 10_000, 50_000];

/// Benchmark every strategy on the same arguments
fn bench_strategies(c: &mut Criterion) {
    let reducer = ParallelProductReducer::new(0);

    let mut group = c.benchmark_group("factorial_strategies");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    for n in SIZES {
        for strategy in Strategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), n), &n, |b, &n| {
                b.iter(|| strategy.compute_with(black_box(n), &reducer).unwrap())
            });
        }
    }

    group.finish();
}

/// Benchmark the thread strategy across worker counts
fn bench_worker_counts(c: &mut Criterion) {
    let n = 20_000u64;

    let mut group = c.benchmark_group("thread_worker_counts");
    group.sample_size(10);

    for workers in [1usize, 2, 4, 8, 16] {
        let reducer = ParallelProductReducer::new(workers);
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, _| {
            b.iter(|| Strategy::Thread.compute_with(black_box(n), &reducer).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_worker_counts);
criterion_main!(benches);
