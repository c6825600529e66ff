//! Benchmarks for escape-puzzle board generation.
//!
//! This benchmark suite measures the full generation loop of
//! `BoardGenerator` under both improvement strategies, including every
//! solver probe the loop issues.
//!
//! # Benchmarks
//!
//! - **`generator_scan`**: Generates boards with the neighbor-scan
//!   strategy, which re-solves every single-step neighbor of each accepted
//!   placement.
//! - **`generator_lookahead`**: Generates boards with a depth-1 lookahead,
//!   which explores two neighbor layers below each placement before
//!   committing.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while testing multiple
//! cases:
//!
//! - **`seed_0`**: `4d6f3a9c51e8b2070f1d96c43b78a5e2d90c1f6b84a73520e8d4c9b1f7a6e350`
//! - **`seed_1`**: `00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff`
//! - **`seed_2`**: `fedcba9876543210fedcba9876543210fedcba9876543210fedcba9876543210`
//!
//! Each seed drives a different construction run against the same
//! mid-range request, so the numbers cover several board shapes while
//! staying reproducible.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use gridlock_generator::{BoardGenerator, GenerateRequest, GeneratorSeed, Strategy};

const SEEDS: [&str; 3] = [
    "4d6f3a9c51e8b2070f1d96c43b78a5e2d90c1f6b84a73520e8d4c9b1f7a6e350",
    "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff",
    "fedcba9876543210fedcba9876543210fedcba9876543210fedcba9876543210",
];

fn request() -> GenerateRequest {
    GenerateRequest {
        target_length: 12,
        target_blocks: 11,
        attempt_budget: 5000,
    }
}

fn bench_generator_scan(c: &mut Criterion) {
    let generator = BoardGenerator::new(Strategy::NeighborScan);
    let request = request();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = GeneratorSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generator_scan", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(&request, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generator_lookahead(c: &mut Criterion) {
    let generator = BoardGenerator::new(Strategy::Lookahead { depth: 1 });
    let request = request();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = GeneratorSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generator_lookahead", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(&request, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generator_scan,
        bench_generator_lookahead
);
criterion_main!(benches);
