//! Criterion benchmarks for path simulation and pricing.

use criterion::{criterion_group, criterion_main, Criterion};

use pricer_mc::{simulate_path, ModelParameters, MonteCarloPricer, PathRng, SimulationConfig};

fn bench_simulate_path(c: &mut Criterion) {
    let mut rng = PathRng::from_seed(42);

    c.bench_function("simulate_path_252_steps", |b| {
        b.iter(|| simulate_path(&mut rng, 100.0, 0.05, 0.2, 1.0 / 252.0, 252))
    });
}

fn bench_price(c: &mut Criterion) {
    let params = ModelParameters::default();
    let config = SimulationConfig::builder()
        .n_paths(1_000)
        .n_steps(252)
        .seed(42)
        .build()
        .unwrap();

    c.bench_function("price_1000_paths_252_steps", |b| {
        b.iter(|| {
            let mut pricer = MonteCarloPricer::new(config.clone()).unwrap();
            pricer.price(&params).unwrap()
        })
    });

    c.bench_function("price_parallel_1000_paths_252_steps", |b| {
        let pricer = MonteCarloPricer::new(config.clone()).unwrap();
        b.iter(|| pricer.price_parallel(&params).unwrap())
    });
}

criterion_group!(benches, bench_simulate_path, bench_price);
criterion_main!(benches);
