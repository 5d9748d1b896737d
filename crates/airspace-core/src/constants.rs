// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Half-extent of the simulated plane on both axes (`-RANGE..=RANGE`).
pub const DEFAULT_RANGE: f64 = 120.0;

/// Number of aircraft generated when no explicit count is supplied.
pub const DEFAULT_INITIAL_COUNT: usize = 2;

/// Minimum pairwise separation for batches added through `Session::generate`.
pub const DEFAULT_MIN_SEPARATION: f64 = 50.0;

/// Separation used when a session (re)spawns aircraft from operator parameters.
pub const DEFAULT_SPAWN_SEPARATION: f64 = 5.0;

/// Operator alert threshold (same units as the plane).
pub const DEFAULT_THRESHOLD: f64 = 15.0;

/// Multiplier applied to the operator threshold before enumeration.
pub const DEFAULT_THRESHOLD_SCALE: f64 = 1.0;

/// Upper bound on aircraft per session.
pub const DEFAULT_MAX_AIRCRAFT: usize = 500;

/// Draws allowed per aircraft slot before placement is declared infeasible.
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Positions retained in an aircraft's history before the oldest are dropped.
pub const DEFAULT_HISTORY_LIMIT: usize = 500;

/// Lower bound (inclusive) of randomly assigned speeds, in plane units per tick.
pub const DEFAULT_SPEED_MIN: f64 = 0.10;

/// Upper bound (exclusive) of randomly assigned speeds.
pub const DEFAULT_SPEED_MAX: f64 = 0.40;

/// Full turn in degrees; headings are drawn from `0.0..FULL_TURN_DEG`.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Subset size at or below which the engine falls back to brute force.
pub const BRUTE_FORCE_CUTOFF: usize = 3;
