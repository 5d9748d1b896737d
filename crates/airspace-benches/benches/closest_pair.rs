// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
// criterion_group!/criterion_main! expand to undocumented functions that cannot
// carry #[allow] (attributes on macro invocations are ignored). Crate-level
// suppress is required for benchmark binaries using Criterion.
#![allow(missing_docs)]
//! Closest-pair engine versus exhaustive search.
//!
//! # Running
//!
//! ```sh
//! cargo bench --package airspace-benches --bench closest_pair
//! ```
//!
//! # What This Measures
//!
//! - `closest_pair/divide_and_conquer/N` and `closest_pair/brute_force/N` on the
//!   same seeded point cloud
//! - `risk_pairs/N`: quadratic enumeration at the default alert threshold
use airspace_core::constants::{DEFAULT_RANGE, DEFAULT_THRESHOLD};
use airspace_core::{brute_force_closest, closest_pair, risk_pairs};
use airspace_dry_tests::random_points;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

const SEED: u64 = 0x00a1_5bac;

fn bench_closest_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_pair");
    group
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(4))
        .sample_size(50);

    for &n in &[10usize, 100, 1_000] {
        let points = random_points(SEED, n, DEFAULT_RANGE);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(
            BenchmarkId::new("divide_and_conquer", n),
            &points,
            |b, points| b.iter(|| criterion::black_box(closest_pair(points))),
        );
        group.bench_with_input(BenchmarkId::new("brute_force", n), &points, |b, points| {
            b.iter(|| criterion::black_box(brute_force_closest(points)));
        });
    }
    group.finish();
}

fn bench_risk_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("risk_pairs");
    for &n in &[10usize, 100, 500] {
        let points = random_points(SEED, n, DEFAULT_RANGE);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            b.iter(|| criterion::black_box(risk_pairs(points, DEFAULT_THRESHOLD)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_closest_pair, bench_risk_pairs);
criterion_main!(benches);
