// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

use airspace_core::{closest_pair, risk_pairs, AircraftId, Point};
use airspace_dry_tests::{oracle_min_distance, oracle_risk_ids};

// Property runs use a pinned seed so failures reproduce across machines.
// Override locally with PROPTEST_SEED, or change `SEED_BYTES` below.

const SEED_BYTES: [u8; 32] = [
    0x2a, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0,
];

fn pinned_runner() -> TestRunner {
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    TestRunner::new_with_rng(
        PropConfig {
            cases: 128,
            ..PropConfig::default()
        },
        rng,
    )
}

fn point_cloud(max: usize) -> impl Strategy<Value = Vec<Point>> {
    // Quarter-unit grid so duplicates and exact ties show up regularly.
    let coord = (-480i32..=480).prop_map(|v| f64::from(v) / 4.0);
    prop::collection::vec((coord.clone(), coord), 0..max).prop_map(|coords| {
        coords
            .into_iter()
            .zip(0u64..)
            .map(|((x, y), id)| Point::new(AircraftId(id), x, y))
            .collect()
    })
}

#[test]
fn proptest_seed_pinned_closest_pair_matches_oracle() {
    let mut runner = pinned_runner();
    runner
        .run(&point_cloud(96), |pts| {
            let (best, stats) = closest_pair(&pts);
            if pts.len() < 2 {
                prop_assert!(best.is_empty());
                prop_assert_eq!(stats.comparisons, 0);
                return Ok(());
            }
            let pair = best
                .as_pair()
                .copied()
                .expect("two or more points always yield a pair");
            prop_assert_eq!(pair.distance(), oracle_min_distance(&pts));
            prop_assert_ne!(pair.a().id(), pair.b().id());
            prop_assert!(stats.recursive_calls >= 1);
            Ok(())
        })
        .expect("closest pair property");
}

#[test]
fn proptest_seed_pinned_risk_pairs_match_oracle() {
    let mut runner = pinned_runner();
    let threshold = (0u32..=200).prop_map(|t| f64::from(t) / 2.0);
    runner
        .run(&(point_cloud(64), threshold), |(pts, threshold)| {
            let got: Vec<_> = risk_pairs(&pts, threshold)
                .iter()
                .map(airspace_core::Pair::ids)
                .collect();
            prop_assert_eq!(got, oracle_risk_ids(&pts, threshold));
            Ok(())
        })
        .expect("risk pairs property");
}

#[test]
fn proptest_seed_pinned_closest_pair_is_order_independent() {
    let mut runner = pinned_runner();
    runner
        .run(&point_cloud(64), |pts| {
            let (forward, _) = closest_pair(&pts);
            let mut reversed = pts.clone();
            reversed.reverse();
            let (backward, _) = closest_pair(&reversed);
            prop_assert_eq!(forward.distance(), backward.distance());
            Ok(())
        })
        .expect("order independence property");
}
