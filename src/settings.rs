//! Simulation settings
//!
//! Read from LocalStorage on the web build; native runs use defaults.

use serde::{Deserialize, Serialize};

use crate::consts::{COLLISION_LIMIT, TICK_INTERVAL_MS};
use crate::error::SceneError;
use crate::renderer::Color;

/// Tunables of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulated time per tick, in milliseconds
    pub tick_interval_ms: f64,
    /// Collisions that retire a rectangle
    pub collision_limit: u32,
    /// Color every rectangle is filled with
    pub fill_color: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            collision_limit: COLLISION_LIMIT,
            fill_color: Color::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if !(self.tick_interval_ms > 0.0 && self.tick_interval_ms.is_finite()) {
            return Err(SceneError::InvalidTickInterval(self.tick_interval_ms));
        }
        if self.collision_limit == 0 {
            return Err(SceneError::InvalidCollisionLimit);
        }
        Ok(())
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "bounce_rects_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native runs have no storage
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
