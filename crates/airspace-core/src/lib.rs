// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Airspace proximity core.

This crate provides:
- Point and pair primitives (`Point`, `Pair`, `PairResult`).
- A divide-and-conquer closest-pair engine with comparison/recursion counters.
- A quadratic risk-pair enumerator for threshold alerts.
- A rejection-sampling placement generator with a bounded retry ceiling.
- The aircraft `Registry` and the per-tick `Session` orchestration.

Design notes:
- Deterministic: randomness only flows through a caller-supplied RNG; pair
  outputs follow canonical id order.
- Pairs carry copies of positions, never references into the registry; they
  describe the snapshot they were computed from.
- The engine and the enumerator are total; failures only occur at the
  validation boundary (`AirspaceError`).
"]

/// Canonical defaults shared by settings and the registry.
pub mod constants;
/// Error taxonomy for boundary validation and placement.
pub mod error;
/// Closest-pair engine (divide and conquer plus brute-force oracle).
pub mod closest;
/// Rejection-sampling placement of new aircraft.
pub mod placement;
/// Aircraft registry: ownership, ids, snapshot queries.
pub mod registry;
/// Threshold-based risk-pair enumeration.
pub mod risk;
/// Per-tick orchestration over a registry.
pub mod session;
/// Simulation settings (serde-friendly, validated).
pub mod settings;
/// Foundational value types.
pub mod types;

pub use closest::{brute_force_closest, closest_pair, AlgorithmStats};
pub use error::AirspaceError;
pub use registry::{Registry, SnapshotStats};
pub use risk::risk_pairs;
pub use session::{Session, TickReport};
pub use settings::SimSettings;
pub use types::aircraft::{Aircraft, AircraftId};
pub use types::pair::{Pair, PairResult};
pub use types::point::Point;
