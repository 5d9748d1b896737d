// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Rejection-sampling cost as the fleet fills the plane.
use airspace_core::constants::{DEFAULT_RANGE, DEFAULT_SPAWN_SEPARATION};
use airspace_core::Registry;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.sample_size(30);
    for &n in &[10usize, 100, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || (Registry::square(DEFAULT_RANGE), StdRng::seed_from_u64(n as u64)),
                |(mut registry, mut rng)| {
                    let created = registry
                        .generate(&mut rng, n, DEFAULT_SPAWN_SEPARATION)
                        .expect("feasible at spawn separation");
                    criterion::black_box(created)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
