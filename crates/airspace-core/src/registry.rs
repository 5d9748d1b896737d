// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Ownership and lookup of live aircraft.
//!
//! The registry is the only owner of [`Aircraft`] values. Detection passes run
//! against a fresh [`Point`] projection of its contents, so results never hold
//! references into it. Iteration is always in ascending [`AircraftId`] order,
//! which makes risk-pair output reproducible for a given snapshot.

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::closest::{closest_pair, AlgorithmStats};
use crate::constants::{
    DEFAULT_HISTORY_LIMIT, DEFAULT_MAX_PLACEMENT_ATTEMPTS, DEFAULT_SPEED_MAX, DEFAULT_SPEED_MIN,
};
use crate::error::AirspaceError;
use crate::placement::{place, PlacementSpec};
use crate::risk::risk_pairs;
use crate::settings::SimSettings;
use crate::types::aircraft::{Aircraft, AircraftId};
use crate::types::pair::{Pair, PairResult};
use crate::types::point::Point;

/// Summary handed to presentation once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SnapshotStats {
    /// Live aircraft.
    pub count: usize,
    /// Half-width of the plane.
    pub range_x: f64,
    /// Half-height of the plane.
    pub range_y: f64,
    /// Collisions credited as avoided once every aircraft left the plane.
    pub collisions_avoided: usize,
    /// `true` when every aircraft is outside the plane bounds.
    pub all_outside_bounds: bool,
}

/// Live set of aircraft plus per-session bookkeeping.
#[derive(Debug, Clone)]
pub struct Registry {
    aircraft: BTreeMap<AircraftId, Aircraft>,
    next_id: u64,
    range_x: f64,
    range_y: f64,
    speed_min: f64,
    speed_max: f64,
    max_placement_attempts: u32,
    history_limit: usize,
    initial_count: usize,
    collisions_avoided: usize,
    collisions_reported: bool,
    last_closest: PairResult,
    last_stats: AlgorithmStats,
}

impl Registry {
    /// Creates an empty registry over `[-range_x, range_x] x [-range_y, range_y]`.
    #[must_use]
    pub fn new(range_x: f64, range_y: f64) -> Self {
        Self {
            aircraft: BTreeMap::new(),
            next_id: 0,
            range_x,
            range_y,
            speed_min: DEFAULT_SPEED_MIN,
            speed_max: DEFAULT_SPEED_MAX,
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
            history_limit: DEFAULT_HISTORY_LIMIT,
            initial_count: 0,
            collisions_avoided: 0,
            collisions_reported: false,
            last_closest: PairResult::NoPair,
            last_stats: AlgorithmStats::default(),
        }
    }

    /// Creates an empty registry over a square plane of half-extent `range`.
    #[must_use]
    pub fn square(range: f64) -> Self {
        Self::new(range, range)
    }

    /// Creates an empty registry configured from `settings`.
    #[must_use]
    pub fn from_settings(settings: &SimSettings) -> Self {
        Self {
            speed_min: settings.speed_min,
            speed_max: settings.speed_max,
            max_placement_attempts: settings.max_placement_attempts,
            history_limit: settings.history_limit,
            ..Self::square(settings.range)
        }
    }

    /// Overrides the per-slot placement retry ceiling.
    #[must_use]
    pub fn with_max_placement_attempts(mut self, attempts: u32) -> Self {
        self.max_placement_attempts = attempts;
        self
    }

    /// Half-width of the plane.
    #[must_use]
    pub fn range_x(&self) -> f64 {
        self.range_x
    }

    /// Half-height of the plane.
    #[must_use]
    pub fn range_y(&self) -> f64 {
        self.range_y
    }

    /// Number of live aircraft.
    #[must_use]
    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    /// Returns `true` when no aircraft are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }

    /// Scatters `count` new aircraft at least `min_separation` apart.
    ///
    /// New aircraft are only separated from each other, not from aircraft
    /// already in the registry. On error the registry is left unchanged.
    pub fn generate<R>(
        &mut self,
        rng: &mut R,
        count: usize,
        min_separation: f64,
    ) -> Result<Vec<Aircraft>, AirspaceError>
    where
        R: Rng + ?Sized,
    {
        if count == 0 {
            return Err(AirspaceError::InvalidCount);
        }
        let spec = self.placement_spec(min_separation);
        let batch = place(rng, count, &spec).inspect_err(|err| {
            warn!(count, min_separation, %err, "aircraft generation failed");
        })?;

        let mut created = Vec::with_capacity(batch.len());
        for slot in batch {
            let id = self.spawn(slot.x, slot.y, slot.speed, slot.heading_deg);
            if let Some(aircraft) = self.aircraft.get(&id) {
                created.push(aircraft.clone());
            }
        }
        info!(count, min_separation, total = self.len(), "generated aircraft");
        Ok(created)
    }

    /// Inserts one aircraft at an explicit position and returns its id.
    pub fn spawn(&mut self, x: f64, y: f64, speed: f64, heading_deg: f64) -> AircraftId {
        let id = AircraftId(self.next_id);
        self.next_id += 1;
        self.aircraft.insert(
            id,
            Aircraft::new(id, x, y, speed, heading_deg, self.history_limit),
        );
        id
    }

    /// Removes every aircraft and restarts id numbering at zero.
    ///
    /// Ids are therefore only unique between two clears.
    pub fn clear(&mut self) {
        let removed = self.aircraft.len();
        self.aircraft.clear();
        self.next_id = 0;
        self.last_closest = PairResult::NoPair;
        self.last_stats = AlgorithmStats::default();
        info!(removed, "registry cleared");
    }

    /// Live aircraft in ascending id order.
    pub fn snapshot(&self) -> impl ExactSizeIterator<Item = &Aircraft> + '_ {
        self.aircraft.values()
    }

    /// Looks up one aircraft.
    #[must_use]
    pub fn aircraft(&self, id: AircraftId) -> Option<&Aircraft> {
        self.aircraft.get(&id)
    }

    /// Mutable access for position updates; ids cannot be changed through it.
    pub fn aircraft_mut(&mut self, id: AircraftId) -> Option<&mut Aircraft> {
        self.aircraft.get_mut(&id)
    }

    /// Fresh point projection of every live aircraft, in id order.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        self.aircraft.values().map(Point::from).collect()
    }

    /// Distance between two live aircraft, or `None` if either id is absent.
    #[must_use]
    pub fn distance(&self, a: AircraftId, b: AircraftId) -> Option<f64> {
        let a = Point::from(self.aircraft.get(&a)?);
        let b = Point::from(self.aircraft.get(&b)?);
        Some(a.distance_to(&b))
    }

    /// `true` only if every aircraft lies outside the plane on some axis.
    ///
    /// An empty registry reports `false`.
    #[must_use]
    pub fn all_outside_bounds(&self) -> bool {
        !self.aircraft.is_empty()
            && self
                .aircraft
                .values()
                .all(|a| !a.is_within(self.range_x, self.range_y))
    }

    /// Runs the closest-pair engine over the current snapshot.
    ///
    /// The result and its counters are cached until the next call (or clear).
    pub fn closest_pair(&mut self) -> PairResult {
        let (best, stats) = closest_pair(&self.points());
        debug!(
            aircraft = self.len(),
            comparisons = stats.comparisons,
            recursive_calls = stats.recursive_calls,
            distance = best.distance(),
            "closest pair computed"
        );
        self.last_closest = best;
        self.last_stats = stats;
        best
    }

    /// Result of the most recent [`closest_pair`](Self::closest_pair) call.
    #[must_use]
    pub fn last_closest(&self) -> PairResult {
        self.last_closest
    }

    /// Counters of the most recent [`closest_pair`](Self::closest_pair) call.
    #[must_use]
    pub fn algorithm_stats(&self) -> AlgorithmStats {
        self.last_stats
    }

    /// Every pair of live aircraft within `threshold`, in id double-loop order.
    #[must_use]
    pub fn risk_pairs(&self, threshold: f64) -> Vec<Pair> {
        risk_pairs(&self.points(), threshold)
    }

    /// Appends each aircraft's current position to its history.
    pub fn record_positions(&mut self) {
        for aircraft in self.aircraft.values_mut() {
            aircraft.record_position();
        }
    }

    /// Starts collisions-avoided bookkeeping for a freshly generated batch.
    pub fn begin_batch(&mut self, initial_count: usize) {
        self.initial_count = initial_count;
        self.collisions_avoided = 0;
        self.collisions_reported = false;
    }

    /// Credits avoided collisions the first time every aircraft has left the
    /// plane. Returns `true` only on that first report.
    pub fn report_departures(&mut self) -> bool {
        if self.collisions_reported || !self.all_outside_bounds() {
            return false;
        }
        self.collisions_avoided = self.initial_count / 2;
        self.collisions_reported = true;
        info!(
            collisions_avoided = self.collisions_avoided,
            "all aircraft left the plane"
        );
        true
    }

    /// Collisions credited so far in this batch.
    #[must_use]
    pub fn collisions_avoided(&self) -> usize {
        self.collisions_avoided
    }

    /// Registry-level statistics for presentation.
    #[must_use]
    pub fn snapshot_stats(&self) -> SnapshotStats {
        SnapshotStats {
            count: self.len(),
            range_x: self.range_x,
            range_y: self.range_y,
            collisions_avoided: self.collisions_avoided,
            all_outside_bounds: self.all_outside_bounds(),
        }
    }

    fn placement_spec(&self, min_separation: f64) -> PlacementSpec {
        PlacementSpec {
            range_x: self.range_x,
            range_y: self.range_y,
            min_separation,
            speed_min: self.speed_min,
            speed_max: self.speed_max,
            max_attempts: self.max_placement_attempts,
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::from_settings(&SimSettings::default())
    }
}
