// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core value types used by the registry and the detection passes.
//!
//! Determinism notes:
//! - Coordinates are `f64`; comparisons that drive ordering use `total_cmp`
//!   so sorting never depends on NaN handling quirks.
//! - `Point` and `Pair` are plain values rebuilt every tick; they carry an
//!   `AircraftId`, never a reference into the registry.

#[doc = "Aircraft entities and their identifiers."]
pub mod aircraft;
#[doc = "Point pairs and the empty-pair sentinel."]
pub mod pair;
#[doc = "Id-tagged 2-D positions."]
pub mod point;
