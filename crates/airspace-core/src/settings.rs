// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HISTORY_LIMIT, DEFAULT_INITIAL_COUNT, DEFAULT_MAX_AIRCRAFT,
    DEFAULT_MAX_PLACEMENT_ATTEMPTS, DEFAULT_MIN_SEPARATION, DEFAULT_RANGE,
    DEFAULT_SPAWN_SEPARATION, DEFAULT_SPEED_MAX, DEFAULT_SPEED_MIN, DEFAULT_THRESHOLD,
    DEFAULT_THRESHOLD_SCALE,
};
use crate::error::AirspaceError;
use crate::placement::PlacementSpec;

/// Tunables for a simulation session.
///
/// Every field has a default, so partial JSON documents deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    /// Half-extent of the plane on both axes.
    pub range: f64,
    /// Aircraft generated when no count is given.
    pub initial_count: usize,
    /// Separation for [`Session::generate`](crate::Session::generate) batches.
    pub min_separation: f64,
    /// Separation used when a session applies operator parameters.
    pub spawn_separation: f64,
    /// Operator alert threshold before scaling.
    pub default_threshold: f64,
    /// Multiplier applied to the operator threshold.
    pub threshold_scale: f64,
    /// Ceiling on aircraft per session.
    pub max_aircraft: usize,
    /// Draws per aircraft slot before placement is declared infeasible.
    pub max_placement_attempts: u32,
    /// Positions kept per aircraft history.
    pub history_limit: usize,
    /// Inclusive lower speed bound.
    pub speed_min: f64,
    /// Exclusive upper speed bound.
    pub speed_max: f64,
    /// RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            range: DEFAULT_RANGE,
            initial_count: DEFAULT_INITIAL_COUNT,
            min_separation: DEFAULT_MIN_SEPARATION,
            spawn_separation: DEFAULT_SPAWN_SEPARATION,
            default_threshold: DEFAULT_THRESHOLD,
            threshold_scale: DEFAULT_THRESHOLD_SCALE,
            max_aircraft: DEFAULT_MAX_AIRCRAFT,
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
            history_limit: DEFAULT_HISTORY_LIMIT,
            speed_min: DEFAULT_SPEED_MIN,
            speed_max: DEFAULT_SPEED_MAX,
            seed: None,
        }
    }
}

impl SimSettings {
    /// Rejects settings that would make generation or enumeration misbehave.
    pub fn validate(&self) -> Result<(), AirspaceError> {
        self.placement_spec(self.min_separation).validate()?;
        self.placement_spec(self.spawn_separation).validate()?;
        if !(self.default_threshold.is_finite() && self.default_threshold > 0.0) {
            return Err(AirspaceError::InvalidThreshold(self.default_threshold));
        }
        if !(self.threshold_scale.is_finite() && self.threshold_scale > 0.0) {
            return Err(AirspaceError::InvalidThreshold(self.threshold_scale));
        }
        if self.max_aircraft == 0 {
            return Err(AirspaceError::InvalidCount);
        }
        Ok(())
    }

    /// Placement parameters for a batch at `min_separation`.
    #[must_use]
    pub fn placement_spec(&self, min_separation: f64) -> PlacementSpec {
        PlacementSpec {
            range_x: self.range,
            range_y: self.range,
            min_separation,
            speed_min: self.speed_min,
            speed_max: self.speed_max,
            max_attempts: self.max_placement_attempts,
        }
    }
}
