//! Criterion benchmarks for the ACO engine.
//!
//! Uses synthetic uniform random instances to measure matrix construction
//! and full-colony overhead independent of any input format.

use aco_tsp::aco::{AcoConfig, AcoRunner};
use aco_tsp::distance::{DistanceMatrix, DistanceMetric};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_coords(n: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect()
}

fn bench_distance_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_matrix");

    for &n in &[50, 200, 500] {
        let coords = random_coords(n, 7);
        group.bench_with_input(BenchmarkId::from_parameter(n), &coords, |b, coords| {
            b.iter(|| {
                let matrix =
                    DistanceMatrix::build(black_box(coords), DistanceMetric::PlanarEuclidean);
                black_box(matrix)
            })
        });
    }
    group.finish();
}

fn bench_colony(c: &mut Criterion) {
    let mut group = c.benchmark_group("colony");
    group.sample_size(10);

    for &n in &[10, 25, 50] {
        let coords = random_coords(n, 7);
        let matrix = DistanceMatrix::build(&coords, DistanceMetric::PlanarEuclidean).unwrap();
        let config = AcoConfig::default()
            .with_num_ants(20)
            .with_num_iterations(50)
            .with_rho(0.5)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(matrix, config),
            |b, (m, c)| {
                b.iter(|| {
                    let result = AcoRunner::run(black_box(m), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_distance_matrix, bench_colony);
criterion_main!(benches);
