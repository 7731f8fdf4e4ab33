//! Benchmarks for the simulation engine.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use montecarlo_rs::{execute, summarize, StatsAccumulator, TrialInput, TrialRng};

fn benchmark_statistics(c: &mut Criterion) {
    let mut rng = TrialRng::seed_from_u64(42);
    let sample: Vec<f64> = (0..100_000).map(|_| rng.normal(0.0, 1.0)).collect();

    c.bench_function("summarize_100k", |bench| {
        bench.iter(|| summarize(black_box(&sample)))
    });

    c.bench_function("accumulator_push", |bench| {
        let mut acc = StatsAccumulator::new();
        bench.iter(|| acc.push(black_box(1.5)))
    });
}

fn benchmark_random(c: &mut Criterion) {
    let mut rng = TrialRng::seed_from_u64(42);

    c.bench_function("rng_uniform", |bench| {
        bench.iter(|| black_box(rng.uniform(0.0, 1.0)))
    });

    c.bench_function("rng_normal", |bench| {
        bench.iter(|| black_box(rng.normal(0.0, 1.0)))
    });
}

fn benchmark_engine(c: &mut Criterion) {
    let pi_trial = |_: &TrialInput, rng: &mut TrialRng| {
        let x = rng.uniform(0.0, 1.0);
        let y = rng.uniform(0.0, 1.0);
        if x * x + y * y <= 1.0 {
            1.0
        } else {
            0.0
        }
    };
    let input = TrialInput::new();

    let mut group = c.benchmark_group("engine_pi_10k");
    for workers in [1usize, 4, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |bench, &workers| {
            bench.iter(|| execute(&input, 10_000, workers, &pi_trial))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_statistics,
    benchmark_random,
    benchmark_engine,
);

criterion_main!(benches);
