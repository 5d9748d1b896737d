// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::cmp::Ordering;
use core::fmt;

use serde::Serialize;

use crate::types::aircraft::AircraftId;
use crate::types::point::Point;

/// Two points and the Euclidean distance between them.
///
/// Invariant: `distance == a.distance_to(&b)`; the constructor computes it, so
/// a `Pair` can never disagree with its own endpoints.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Pair {
    a: Point,
    b: Point,
    distance: f64,
}

impl Pair {
    /// Builds a pair from two points, measuring their distance.
    #[must_use]
    pub fn new(a: Point, b: Point) -> Self {
        let distance = a.distance_to(&b);
        Self { a, b, distance }
    }

    /// First point (as encountered by the pass that produced the pair).
    #[must_use]
    pub fn a(&self) -> &Point {
        &self.a
    }

    /// Second point.
    #[must_use]
    pub fn b(&self) -> &Point {
        &self.b
    }

    /// Euclidean distance between the two points.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Ids of both endpoints canonicalized as `(min, max)`.
    #[must_use]
    pub fn ids(&self) -> (AircraftId, AircraftId) {
        let (x, y) = (self.a.id(), self.b.id());
        if x <= y {
            (x, y)
        } else {
            (y, x)
        }
    }

    /// Returns `true` if `id` is one of the endpoints.
    #[must_use]
    pub fn involves(&self, id: AircraftId) -> bool {
        self.a.id() == id || self.b.id() == id
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pair({}, {}, d={:.2})", self.a.id(), self.b.id(), self.distance)
    }
}

/// Outcome of a closest-pair search.
///
/// `NoPair` is the empty sentinel: it reports an infinite distance, so any
/// real pair beats it and it is always replaced once two points exist.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PairResult {
    /// A concrete pair was found.
    Pair(Pair),
    /// Fewer than two points were available.
    #[default]
    NoPair,
}

impl PairResult {
    /// Distance of the held pair, or `f64::INFINITY` for `NoPair`.
    #[must_use]
    pub fn distance(&self) -> f64 {
        match self {
            Self::Pair(pair) => pair.distance(),
            Self::NoPair => f64::INFINITY,
        }
    }

    /// Returns the held pair, if any.
    #[must_use]
    pub fn as_pair(&self) -> Option<&Pair> {
        match self {
            Self::Pair(pair) => Some(pair),
            Self::NoPair => None,
        }
    }

    /// Returns `true` for the empty sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoPair)
    }

    /// Orders results by distance; `NoPair` sorts after every real pair.
    #[must_use]
    pub fn cmp_distance(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::NoPair, Self::NoPair) => Ordering::Equal,
            (Self::NoPair, Self::Pair(_)) => Ordering::Greater,
            (Self::Pair(_), Self::NoPair) => Ordering::Less,
            (Self::Pair(a), Self::Pair(b)) => a.distance().total_cmp(&b.distance()),
        }
    }

    /// Keeps `self` unless `other` is strictly closer.
    #[must_use]
    pub fn closer(self, other: Self) -> Self {
        if other.cmp_distance(&self) == Ordering::Less {
            other
        } else {
            self
        }
    }
}

impl From<Pair> for PairResult {
    fn from(pair: Pair) -> Self {
        Self::Pair(pair)
    }
}

impl fmt::Display for PairResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pair(pair) => pair.fmt(f),
            Self::NoPair => f.write_str("Pair(empty)"),
        }
    }
}
