// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use super::SearchContext;
use crate::types::pair::{Pair, PairResult};
use crate::types::point::Point;

/// Compares every unordered pair in `points`, keeping the first minimum.
pub(super) fn scan(points: &[Point], ctx: &mut SearchContext) -> PairResult {
    let mut best = PairResult::NoPair;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            ctx.count_comparison();
            best = best.closer(Pair::new(*a, *b).into());
        }
    }
    best
}
