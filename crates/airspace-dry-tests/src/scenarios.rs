// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Canned point layouts and registry builders for detection tests.

use airspace_core::{AircraftId, Point, Registry};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Speed given to aircraft spawned by fixtures.
pub const FIXTURE_SPEED: f64 = 0.25;

/// Square with one aircraft 5 units from the origin: closest pair is `(0, 3)`.
pub const FOUR_CORNERS: [(f64, f64); 4] = [(0.0, 0.0), (100.0, 0.0), (0.0, 100.0), (3.0, 4.0)];

/// Five points on the x axis; `(0,1)`, `(1,2)` and `(2,3)` all tie at 1.0.
pub const COLLINEAR: [(f64, f64); 5] = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (100.0, 0.0)];

/// Eight points whose closest pair (ids 3 and 4) straddles the median x split.
///
/// Each half on its own has a minimum distance above 20, while the straddling
/// pair is about 1.12 apart, so only the strip scan can find it.
pub const STRADDLE: [(f64, f64); 8] = [
    (0.0, 0.0),
    (10.0, 50.0),
    (20.0, -5.0),
    (29.5, 25.0),
    (30.5, 25.5),
    (40.0, 0.0),
    (50.0, 50.0),
    (60.0, -5.0),
];

/// Ids expected for the closest pair of [`STRADDLE`].
pub const STRADDLE_IDS: (AircraftId, AircraftId) = (AircraftId(3), AircraftId(4));

/// Builds points with ids `0..n` in input order.
pub fn points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords
        .iter()
        .zip(0u64..)
        .map(|(&(x, y), id)| Point::new(AircraftId(id), x, y))
        .collect()
}

/// Builds a registry over `[-range, range]^2` holding one aircraft per coordinate.
pub fn registry_with(range: f64, coords: &[(f64, f64)]) -> Registry {
    let mut registry = Registry::square(range);
    for &(x, y) in coords {
        registry.spawn(x, y, FIXTURE_SPEED, 0.0);
    }
    registry
}

/// `n` uniformly random points in `[-range, range]^2`, reproducible by `seed`.
pub fn random_points(seed: u64, n: usize, range: f64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .zip(0u64..)
        .map(|(_, id)| {
            let x = rng.gen_range(-range..=range);
            let y = rng.gen_range(-range..=range);
            Point::new(AircraftId(id), x, y)
        })
        .collect()
}

/// Minimum pairwise distance by exhaustive search; `INFINITY` below two points.
///
/// Kept independent from the engine crate's own brute-force path so it can
/// act as an oracle for both.
pub fn oracle_min_distance(points: &[Point]) -> f64 {
    let mut best = f64::INFINITY;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            best = best.min(a.distance_to(b));
        }
    }
    best
}

/// Every canonical id pair within `threshold`, by exhaustive search.
pub fn oracle_risk_ids(points: &[Point], threshold: f64) -> Vec<(AircraftId, AircraftId)> {
    let mut out = Vec::new();
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            if a.distance_to(b) <= threshold {
                let (lo, hi) = if a.id() <= b.id() {
                    (a.id(), b.id())
                } else {
                    (b.id(), a.id())
                };
                out.push((lo, hi));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straddle_halves_are_far_apart() {
        let pts = points(&STRADDLE);
        assert!(oracle_min_distance(&pts[..4]) > 20.0);
        assert!(oracle_min_distance(&pts[4..]) > 20.0);
        assert!(oracle_min_distance(&pts) < 1.2);
    }

    #[test]
    fn random_points_are_reproducible() {
        assert_eq!(random_points(9, 16, 50.0), random_points(9, 16, 50.0));
    }
}
