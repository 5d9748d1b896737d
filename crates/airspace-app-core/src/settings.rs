// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Loading and saving [`SimSettings`] through a [`ConfigStore`].

use airspace_core::SimSettings;
use tracing::{debug, info};

use crate::config::{ConfigError, ConfigService, ConfigStore};

/// Store key under which simulation settings live.
pub const SETTINGS_KEY: &str = "settings";

/// Loads validated settings, falling back to defaults when none are stored.
pub fn load_settings<S>(service: &ConfigService<S>) -> Result<SimSettings, ConfigError>
where
    S: ConfigStore,
{
    let settings = match service.load::<SimSettings>(SETTINGS_KEY)? {
        Some(stored) => {
            debug!(key = SETTINGS_KEY, "loaded stored settings");
            stored
        }
        None => {
            debug!(key = SETTINGS_KEY, "no stored settings; using defaults");
            SimSettings::default()
        }
    };
    settings.validate()?;
    Ok(settings)
}

/// Validates and persists settings.
pub fn save_settings<S>(service: &ConfigService<S>, settings: &SimSettings) -> Result<(), ConfigError>
where
    S: ConfigStore,
{
    settings.validate()?;
    service.save(SETTINGS_KEY, settings)?;
    info!(key = SETTINGS_KEY, "settings saved");
    Ok(())
}
