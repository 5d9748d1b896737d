// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Threshold-based risk-pair enumeration.
//!
//! Ordering contract:
//! - Pairs are emitted in double-loop order over the input slice: for inputs
//!   `p0..pn`, `(pi, pj)` with `i < j`, outer index ascending, then inner.
//! - Each unordered pair appears at most once, never in both orientations.
//! - The comparison is inclusive: a pair exactly at the threshold is reported.
//!
//! All `n(n-1)/2` combinations are checked; there is no early exit.

use crate::types::pair::Pair;
use crate::types::point::Point;

/// Returns every pair in `points` whose distance is `<= threshold`.
///
/// A NaN or negative threshold matches nothing; a threshold of zero matches
/// only coincident points.
#[must_use]
pub fn risk_pairs(points: &[Point], threshold: f64) -> Vec<Pair> {
    let mut out = Vec::new();
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let pair = Pair::new(*a, *b);
            if pair.distance() <= threshold {
                out.push(pair);
            }
        }
    }
    out
}
