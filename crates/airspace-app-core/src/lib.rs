// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for airspace tools (config storage, settings).
//! Keeps CLI and presentation adapters thin and framework-agnostic.

pub mod config;
pub mod settings;
