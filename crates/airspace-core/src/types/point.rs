// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use serde::Serialize;

use crate::types::aircraft::{Aircraft, AircraftId};

/// Position of an aircraft at the moment a detection pass ran.
///
/// Points are projections, not handles: they copy the coordinates out of the
/// registry and keep only the id for correlation.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Point {
    id: AircraftId,
    x: f64,
    y: f64,
}

impl Point {
    /// Builds a point for `id` at `(x, y)`.
    #[must_use]
    pub fn new(id: AircraftId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Returns the id of the aircraft this point was projected from.
    #[must_use]
    pub fn id(&self) -> AircraftId {
        self.id
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<&Aircraft> for Point {
    fn from(aircraft: &Aircraft) -> Self {
        let (x, y) = aircraft.position();
        Self::new(aircraft.id(), x, y)
    }
}
