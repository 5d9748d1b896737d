// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors emitted at the airspace validation boundary.
///
/// The closest-pair engine and risk enumerator never fail; everything here is
/// raised before (or instead of) touching the registry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AirspaceError {
    /// A generation request asked for zero aircraft.
    #[error("aircraft count must be greater than zero")]
    InvalidCount,
    /// A generation request exceeded the configured aircraft ceiling.
    #[error("requested {requested} aircraft, maximum is {max}")]
    TooManyAircraft {
        /// Count the caller asked for.
        requested: usize,
        /// Configured ceiling.
        max: usize,
    },
    /// Alert threshold was non-positive or not finite.
    #[error("alert threshold must be a positive finite number, got {0}")]
    InvalidThreshold(f64),
    /// Minimum separation was negative or not finite.
    #[error("minimum separation must be a non-negative finite number, got {0}")]
    InvalidSeparation(f64),
    /// Plane bounds were non-positive or not finite.
    #[error("plane range must be positive and finite, got ({range_x}, {range_y})")]
    InvalidRange {
        /// Half-width.
        range_x: f64,
        /// Half-height.
        range_y: f64,
    },
    /// Speed bounds were inverted or not finite.
    #[error("speed range must satisfy 0 <= min < max, got {min}..{max}")]
    InvalidSpeedRange {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// Rejection sampling hit its retry ceiling before placing every aircraft.
    #[error(
        "placement infeasible: placed {placed} of {requested} aircraft before exhausting {attempts} attempts"
    )]
    InfeasiblePlacement {
        /// Aircraft accepted before the ceiling was hit.
        placed: usize,
        /// Aircraft requested.
        requested: usize,
        /// Draws spent on the failing slot.
        attempts: u32,
    },
}
