// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Rejection-sampling placement of new aircraft.
//!
//! Each slot draws uniform candidates from `[-range_x, range_x] x [-range_y, range_y]`
//! until one is at least `min_separation` away from every position already
//! accepted in the same batch. Earlier batches (aircraft already in a
//! registry) are not consulted.
//!
//! A slot gives up after `max_attempts` draws and the whole batch fails with
//! [`AirspaceError::InfeasiblePlacement`]; nothing is returned partially.

use rand::Rng;

use crate::constants::{DEFAULT_MAX_AIRCRAFT, FULL_TURN_DEG};
use crate::error::AirspaceError;

/// Parameters of one placement batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementSpec {
    /// Half-width of the region.
    pub range_x: f64,
    /// Half-height of the region.
    pub range_y: f64,
    /// Minimum distance between any two positions in the batch.
    pub min_separation: f64,
    /// Inclusive lower bound for assigned speeds.
    pub speed_min: f64,
    /// Exclusive upper bound for assigned speeds.
    pub speed_max: f64,
    /// Draws allowed per slot before the batch is declared infeasible.
    pub max_attempts: u32,
}

impl PlacementSpec {
    /// Checks that sampling with this spec cannot panic or loop forever.
    pub fn validate(&self) -> Result<(), AirspaceError> {
        let range_ok = self.range_x.is_finite()
            && self.range_y.is_finite()
            && self.range_x > 0.0
            && self.range_y > 0.0;
        if !range_ok {
            return Err(AirspaceError::InvalidRange {
                range_x: self.range_x,
                range_y: self.range_y,
            });
        }
        if !(self.min_separation.is_finite() && self.min_separation >= 0.0) {
            return Err(AirspaceError::InvalidSeparation(self.min_separation));
        }
        let speed_ok = self.speed_min.is_finite()
            && self.speed_max.is_finite()
            && self.speed_min >= 0.0
            && self.speed_min < self.speed_max;
        if !speed_ok {
            return Err(AirspaceError::InvalidSpeedRange {
                min: self.speed_min,
                max: self.speed_max,
            });
        }
        Ok(())
    }
}

/// One accepted slot: position plus the randomly assigned attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Speed in `[speed_min, speed_max)`.
    pub speed: f64,
    /// Heading in degrees, `[0, 360)`.
    pub heading_deg: f64,
}

/// Draws `count` mutually separated placements.
///
/// `count` is not validated here; a zero count yields an empty batch.
pub fn place<R>(
    rng: &mut R,
    count: usize,
    spec: &PlacementSpec,
) -> Result<Vec<Placement>, AirspaceError>
where
    R: Rng + ?Sized,
{
    spec.validate()?;
    let max_attempts = spec.max_attempts.max(1);
    let mut accepted: Vec<Placement> = Vec::with_capacity(count.min(DEFAULT_MAX_AIRCRAFT));

    for _ in 0..count {
        let mut position = None;
        for _ in 0..max_attempts {
            let x = rng.gen_range(-spec.range_x..=spec.range_x);
            let y = rng.gen_range(-spec.range_y..=spec.range_y);
            let clear = accepted
                .iter()
                .all(|p| (x - p.x).hypot(y - p.y) >= spec.min_separation);
            if clear {
                position = Some((x, y));
                break;
            }
        }
        let Some((x, y)) = position else {
            return Err(AirspaceError::InfeasiblePlacement {
                placed: accepted.len(),
                requested: count,
                attempts: max_attempts,
            });
        };
        let speed = rng.gen_range(spec.speed_min..spec.speed_max);
        let heading_deg = rng.gen_range(0.0..FULL_TURN_DEG);
        accepted.push(Placement {
            x,
            y,
            speed,
            heading_deg,
        });
    }
    Ok(accepted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn spec(min_separation: f64) -> PlacementSpec {
        PlacementSpec {
            range_x: 120.0,
            range_y: 120.0,
            min_separation,
            speed_min: 0.10,
            speed_max: 0.40,
            max_attempts: 10_000,
        }
    }

    #[test]
    fn batch_respects_bounds_and_separation() {
        let mut rng = StdRng::seed_from_u64(7);
        let batch = place(&mut rng, 20, &spec(20.0)).unwrap();
        assert_eq!(batch.len(), 20);
        for (i, a) in batch.iter().enumerate() {
            assert!(a.x.abs() <= 120.0 && a.y.abs() <= 120.0);
            assert!((0.10..0.40).contains(&a.speed));
            assert!((0.0..360.0).contains(&a.heading_deg));
            for b in &batch[i + 1..] {
                assert!((a.x - b.x).hypot(a.y - b.y) >= 20.0);
            }
        }
    }

    #[test]
    fn same_seed_same_batch() {
        let a = place(&mut StdRng::seed_from_u64(42), 5, &spec(10.0)).unwrap();
        let b = place(&mut StdRng::seed_from_u64(42), 5, &spec(10.0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn impossible_separation_fails_instead_of_hanging() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut tight = spec(1_000.0);
        tight.max_attempts = 50;
        let err = place(&mut rng, 2, &tight).unwrap_err();
        assert_eq!(
            err,
            AirspaceError::InfeasiblePlacement {
                placed: 1,
                requested: 2,
                attempts: 50
            }
        );
    }

    #[test]
    fn invalid_specs_are_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut bad = spec(5.0);
        bad.range_x = 0.0;
        assert!(matches!(
            place(&mut rng, 1, &bad),
            Err(AirspaceError::InvalidRange { .. })
        ));
        let mut bad = spec(-1.0);
        bad.range_x = 10.0;
        assert!(matches!(
            place(&mut rng, 1, &bad),
            Err(AirspaceError::InvalidSeparation(_))
        ));
        let mut bad = spec(1.0);
        bad.speed_min = 0.5;
        assert!(matches!(
            place(&mut rng, 1, &bad),
            Err(AirspaceError::InvalidSpeedRange { .. })
        ));
    }

    #[test]
    fn oversized_count_fails_on_attempts_not_allocation() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut cramped = spec(50.0);
        cramped.range_x = 1.0;
        cramped.range_y = 1.0;
        cramped.max_attempts = 5;
        let err = place(&mut rng, usize::MAX, &cramped).unwrap_err();
        assert_eq!(
            err,
            AirspaceError::InfeasiblePlacement {
                placed: 1,
                requested: usize::MAX,
                attempts: 5
            }
        );
    }

    #[test]
    fn zero_count_is_an_empty_batch() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(place(&mut rng, 0, &spec(5.0)).unwrap().is_empty());
    }
}
