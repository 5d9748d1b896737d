// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use super::SearchContext;
use crate::types::pair::{Pair, PairResult};
use crate::types::point::Point;

/// Searches the band `|x - split_x| < d` for a pair closer than `d`.
///
/// Candidates are visited in y order and each point is only compared with its
/// successors while their y gap stays below `d`. Any pair at distance `< d`
/// must satisfy that gap bound, and a `d x 2d` box holds at most a constant
/// number of points separated by `d`, so the inner loop is constant-bounded.
pub(super) fn scan(points: &[Point], split_x: f64, d: f64, ctx: &mut SearchContext) -> PairResult {
    let mut band: Vec<Point> = points
        .iter()
        .filter(|p| (p.x() - split_x).abs() < d)
        .copied()
        .collect();
    band.sort_by(|a, b| a.y().total_cmp(&b.y()));

    let mut best = PairResult::NoPair;
    for (i, a) in band.iter().enumerate() {
        for b in &band[i + 1..] {
            let within = b.y() - a.y() < d;
            if !within {
                break;
            }
            ctx.count_comparison();
            best = best.closer(Pair::new(*a, *b).into());
        }
    }
    best
}
