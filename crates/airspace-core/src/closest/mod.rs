// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Closest-pair search over a set of points.
//!
//! [`closest_pair`] is the classic `O(n log n)` divide and conquer: sort once
//! by x, split at `len / 2`, solve both halves, then scan the vertical strip
//! around the split line for pairs that straddle it. Subsets of three or fewer
//! points are solved by exhaustive comparison.
//!
//! Determinism contract:
//! - Sorting is stable (`total_cmp` on the coordinate), so equal coordinates
//!   keep their input order.
//! - On equal distances the left half wins over the right half, and both win
//!   over the strip. Within a scan the first minimal pair found is kept.
//! - Counters travel in an explicit [`SearchContext`]; there is no shared
//!   state between calls, so the engine is reentrant.

mod brute;
mod strip;

use serde::{Deserialize, Serialize};

use crate::constants::BRUTE_FORCE_CUTOFF;
use crate::types::pair::PairResult;
use crate::types::point::Point;

/// Instrumentation for one closest-pair computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmStats {
    /// Pairwise distance evaluations (base cases plus strip scans).
    pub comparisons: u64,
    /// Invocations of the recursive routine, including the outermost one.
    pub recursive_calls: u64,
}

/// Mutable accumulator threaded through one search.
#[derive(Debug, Default)]
pub(crate) struct SearchContext {
    stats: AlgorithmStats,
}

impl SearchContext {
    fn count_comparison(&mut self) {
        self.stats.comparisons += 1;
    }

    fn count_call(&mut self) {
        self.stats.recursive_calls += 1;
    }

    fn finish(self) -> AlgorithmStats {
        self.stats
    }
}

/// Finds the globally closest pair among `points`.
///
/// Returns [`PairResult::NoPair`] (and zeroed stats) when fewer than two
/// points are supplied. The input slice is not modified.
#[must_use]
pub fn closest_pair(points: &[Point]) -> (PairResult, AlgorithmStats) {
    let mut ctx = SearchContext::default();
    if points.len() < 2 {
        return (PairResult::NoPair, ctx.finish());
    }
    let mut by_x = points.to_vec();
    by_x.sort_by(|a, b| a.x().total_cmp(&b.x()));
    let best = divide(&by_x, &mut ctx);
    (best, ctx.finish())
}

/// Exhaustive `O(n^2)` closest-pair search.
///
/// Serves as the correctness oracle for [`closest_pair`] and as the baseline
/// in benchmarks. `recursive_calls` is always zero.
#[must_use]
pub fn brute_force_closest(points: &[Point]) -> (PairResult, AlgorithmStats) {
    let mut ctx = SearchContext::default();
    let best = brute::scan(points, &mut ctx);
    (best, ctx.finish())
}

fn divide(points: &[Point], ctx: &mut SearchContext) -> PairResult {
    ctx.count_call();
    if points.len() <= BRUTE_FORCE_CUTOFF {
        return brute::scan(points, ctx);
    }

    let (left, right) = points.split_at(points.len() / 2);
    let left_best = divide(left, ctx);
    let right_best = divide(right, ctx);
    let best = left_best.closer(right_best);

    // `right` is non-empty: len > 3 so each half holds at least two points.
    let split_x = right[0].x();
    let strip_best = strip::scan(points, split_x, best.distance(), ctx);
    best.closer(strip_best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::aircraft::AircraftId;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Point::new(AircraftId(i as u64), x, y))
            .collect()
    }

    #[test]
    fn fewer_than_two_points_yield_sentinel() {
        let (empty, stats) = closest_pair(&[]);
        assert!(empty.is_empty());
        assert_eq!(stats, AlgorithmStats::default());

        let (single, _) = closest_pair(&pts(&[(1.0, 1.0)]));
        assert_eq!(single.distance(), f64::INFINITY);
    }

    #[test]
    fn base_case_counts_every_pair() {
        let (best, stats) = closest_pair(&pts(&[(0.0, 0.0), (10.0, 0.0), (11.0, 0.0)]));
        assert_eq!(best.distance(), 1.0);
        assert_eq!(stats.comparisons, 3);
        assert_eq!(stats.recursive_calls, 1);
    }

    #[test]
    fn four_points_split_into_two_base_cases() {
        let points = pts(&[(0.0, 0.0), (100.0, 0.0), (0.0, 100.0), (3.0, 4.0)]);
        let (best, stats) = closest_pair(&points);
        let pair = best.as_pair().copied();
        assert_eq!(best.distance(), 5.0);
        assert_eq!(pair.map(|p| p.ids()), Some((AircraftId(0), AircraftId(3))));
        assert_eq!(stats.recursive_calls, 3);
        // one comparison per half plus at least one strip comparison
        assert!(stats.comparisons >= 2);
    }

    #[test]
    fn input_is_left_untouched() {
        let points = pts(&[(5.0, 0.0), (1.0, 0.0), (3.0, 0.0), (2.0, 0.0)]);
        let before = points.clone();
        let _ = closest_pair(&points);
        assert_eq!(points, before);
    }

    #[test]
    fn counters_reset_between_calls() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0), (4.0, 4.0), (9.0, 2.0), (7.0, 7.0)]);
        let (_, first) = closest_pair(&points);
        let (_, second) = closest_pair(&points);
        assert_eq!(first, second);
    }

    #[test]
    fn brute_force_reports_no_recursion() {
        let points = pts(&[(0.0, 0.0), (2.0, 0.0), (5.0, 0.0), (6.0, 0.0)]);
        let (best, stats) = brute_force_closest(&points);
        assert_eq!(best.distance(), 1.0);
        assert_eq!(stats.comparisons, 6);
        assert_eq!(stats.recursive_calls, 0);
    }
}
