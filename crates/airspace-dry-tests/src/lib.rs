// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for airspace crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`config`] - In-memory config store fake for testing without filesystem
//! - [`scenarios`] - Canned point layouts, seeded random sets, brute-force oracles

pub mod config;
pub mod scenarios;

pub use config::InMemoryConfigStore;
pub use scenarios::{
    oracle_min_distance, oracle_risk_ids, points, random_points, registry_with, COLLINEAR,
    FOUR_CORNERS, STRADDLE, STRADDLE_IDS,
};
