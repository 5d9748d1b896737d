// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Registry-assigned aircraft identifier.
///
/// Ids are handed out monotonically by a [`Registry`](crate::Registry) and are
/// unique until the registry is cleared, at which point numbering restarts at
/// zero.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AircraftId(pub u64);

impl AircraftId {
    /// Returns the raw numeric value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AircraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A{}", self.0)
    }
}

/// A simulated aircraft on the plane.
///
/// Speed and heading are carried as attributes only; nothing in the core
/// advances positions from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aircraft {
    id: AircraftId,
    x: f64,
    y: f64,
    speed: f64,
    heading_deg: f64,
    history: VecDeque<(f64, f64)>,
    history_limit: usize,
}

impl Aircraft {
    /// Creates an aircraft whose history starts with its spawn position.
    ///
    /// `history_limit` bounds the retained history; a limit of zero is treated
    /// as one so the current position is always present.
    #[must_use]
    pub fn new(
        id: AircraftId,
        x: f64,
        y: f64,
        speed: f64,
        heading_deg: f64,
        history_limit: usize,
    ) -> Self {
        let history_limit = history_limit.max(1);
        let mut history = VecDeque::with_capacity(history_limit.min(64));
        history.push_back((x, y));
        Self {
            id,
            x,
            y,
            speed,
            heading_deg,
            history,
            history_limit,
        }
    }

    /// Returns the aircraft id.
    #[must_use]
    pub fn id(&self) -> AircraftId {
        self.id
    }

    /// Returns the current `(x, y)` position.
    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Speed in plane units per tick.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Heading in degrees, `[0, 360)`.
    #[must_use]
    pub fn heading_deg(&self) -> f64 {
        self.heading_deg
    }

    /// Past positions, oldest first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = &(f64, f64)> + '_ {
        self.history.iter()
    }

    /// Moves the aircraft and appends the new position to its history.
    pub fn relocate(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.record_position();
    }

    /// Appends the current position to the history, dropping the oldest
    /// entries once the limit is exceeded.
    pub fn record_position(&mut self) {
        if self.history.len() == self.history_limit {
            self.history.pop_front();
        }
        self.history.push_back((self.x, self.y));
    }

    /// Returns `true` when both coordinates lie within `±range_x` / `±range_y`.
    #[must_use]
    pub fn is_within(&self, range_x: f64, range_y: f64) -> bool {
        self.x.abs() <= range_x && self.y.abs() <= range_y
    }
}

impl fmt::Display for Aircraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Aircraft {}: ({:.2}, {:.2})", self.id, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_starts_with_spawn_and_is_bounded() {
        let mut a = Aircraft::new(AircraftId(1), 0.0, 0.0, 0.2, 90.0, 3);
        assert_eq!(a.history().len(), 1);
        a.relocate(1.0, 0.0);
        a.relocate(2.0, 0.0);
        a.relocate(3.0, 0.0);
        let hist: Vec<_> = a.history().copied().collect();
        assert_eq!(hist, vec![(1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        assert_eq!(a.position(), (3.0, 0.0));
    }

    #[test]
    fn zero_history_limit_keeps_current_position() {
        let mut a = Aircraft::new(AircraftId(0), 5.0, 5.0, 0.1, 0.0, 0);
        a.relocate(6.0, 6.0);
        let hist: Vec<_> = a.history().copied().collect();
        assert_eq!(hist, vec![(6.0, 6.0)]);
    }

    #[test]
    fn bounds_are_inclusive() {
        let a = Aircraft::new(AircraftId(0), 120.0, -120.0, 0.1, 0.0, 1);
        assert!(a.is_within(120.0, 120.0));
        assert!(!a.is_within(119.9, 120.0));
        assert_eq!(a.to_string(), "Aircraft A0: (120.00, -120.00)");
    }
}
