// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Per-tick orchestration.
//!
//! A [`Session`] owns the registry and drives one detection pass per call to
//! [`Session::tick`]: closest pair first, then risk pairs, then departure
//! bookkeeping. It is single-threaded and pull-based; the caller decides when
//! ticks happen.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info};

use crate::closest::AlgorithmStats;
use crate::error::AirspaceError;
use crate::registry::{Registry, SnapshotStats};
use crate::settings::SimSettings;
use crate::types::aircraft::Aircraft;
use crate::types::pair::{Pair, PairResult};

/// Everything presentation needs from one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickReport {
    /// Ticks since parameters were last applied (1-based).
    pub tick: u64,
    /// Globally closest pair.
    pub closest: PairResult,
    /// Pairs within the effective threshold.
    pub risk_pairs: Vec<Pair>,
    /// Engine counters for `closest`.
    pub algorithm: AlgorithmStats,
    /// Registry statistics after bookkeeping.
    pub snapshot: SnapshotStats,
}

/// A simulation session: registry, settings, RNG and operator threshold.
#[derive(Debug)]
pub struct Session {
    registry: Registry,
    settings: SimSettings,
    rng: StdRng,
    threshold: Option<f64>,
    tick: u64,
}

impl Session {
    /// Creates a session awaiting parameters.
    ///
    /// The RNG is seeded from `settings.seed` when present, otherwise from
    /// entropy.
    pub fn new(settings: SimSettings) -> Result<Self, AirspaceError> {
        settings.validate()?;
        let rng = settings
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Ok(Self {
            registry: Registry::from_settings(&settings),
            settings,
            rng,
            threshold: None,
            tick: 0,
        })
    }

    /// Validates operator parameters, then replaces the fleet with `count`
    /// freshly generated aircraft.
    ///
    /// Validation failures leave the session untouched. A placement failure
    /// happens after the old fleet is cleared and leaves the session empty and
    /// awaiting parameters.
    pub fn apply_parameters(
        &mut self,
        count: usize,
        threshold: f64,
    ) -> Result<Vec<Aircraft>, AirspaceError> {
        if count == 0 {
            return Err(AirspaceError::InvalidCount);
        }
        if count > self.settings.max_aircraft {
            return Err(AirspaceError::TooManyAircraft {
                requested: count,
                max: self.settings.max_aircraft,
            });
        }
        if !(threshold.is_finite() && threshold > 0.0) {
            return Err(AirspaceError::InvalidThreshold(threshold));
        }

        self.reset();
        let created =
            self.registry
                .generate(&mut self.rng, count, self.settings.spawn_separation)?;
        self.registry.begin_batch(count);
        self.threshold = Some(threshold);
        info!(count, threshold, "parameters applied");
        Ok(created)
    }

    /// Adds `count` aircraft to the current fleet at `settings.min_separation`.
    ///
    /// The fleet is not cleared and departure bookkeeping is untouched. The
    /// new aircraft are only separated from each other.
    pub fn generate(&mut self, count: usize) -> Result<Vec<Aircraft>, AirspaceError> {
        if count == 0 {
            return Err(AirspaceError::InvalidCount);
        }
        let requested = self.registry.len().saturating_add(count);
        if requested > self.settings.max_aircraft {
            return Err(AirspaceError::TooManyAircraft {
                requested,
                max: self.settings.max_aircraft,
            });
        }
        self.registry
            .generate(&mut self.rng, count, self.settings.min_separation)
    }

    /// Clears the fleet and returns to the awaiting-parameters state.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.registry.begin_batch(0);
        self.threshold = None;
        self.tick = 0;
    }

    /// `true` until parameters have been applied successfully.
    #[must_use]
    pub fn is_awaiting_parameters(&self) -> bool {
        self.threshold.is_none()
    }

    /// Operator threshold as entered.
    #[must_use]
    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }

    /// Threshold actually used for enumeration (`threshold * threshold_scale`).
    #[must_use]
    pub fn effective_threshold(&self) -> Option<f64> {
        self.threshold.map(|t| t * self.settings.threshold_scale)
    }

    /// Runs one detection pass over the current fleet.
    pub fn tick(&mut self) -> TickReport {
        self.tick += 1;
        let closest = self.registry.closest_pair();
        let risk_pairs = self
            .effective_threshold()
            .map(|t| self.registry.risk_pairs(t))
            .unwrap_or_default();
        self.registry.report_departures();
        let report = TickReport {
            tick: self.tick,
            closest,
            risk_pairs,
            algorithm: self.registry.algorithm_stats(),
            snapshot: self.registry.snapshot_stats(),
        };
        debug!(
            tick = report.tick,
            risk_pairs = report.risk_pairs.len(),
            closest = %report.closest,
            "tick complete"
        );
        report
    }

    /// Appends every aircraft's position to its history.
    pub fn record_positions(&mut self) {
        self.registry.record_positions();
    }

    /// Read-only registry view.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Mutable registry access (scenario setup, position updates).
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Active settings.
    #[must_use]
    pub fn settings(&self) -> &SimSettings {
        &self.settings
    }

    /// Sets the operator threshold without regenerating the fleet.
    pub fn set_threshold(&mut self, threshold: f64) -> Result<(), AirspaceError> {
        if !(threshold.is_finite() && threshold > 0.0) {
            return Err(AirspaceError::InvalidThreshold(threshold));
        }
        self.threshold = Some(threshold);
        Ok(())
    }
}
