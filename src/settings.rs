//! Game settings
//!
//! Read once at startup from an optional JSON document embedded in the page.
//! Nothing is written back.

use serde::{Deserialize, Serialize};

use crate::consts::MUSIC_VOLUME;
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Silence all audio
    pub muted: bool,

    // === Gameplay ===
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            sfx_volume: 1.0,
            music_volume: MUSIC_VOLUME,
            muted: false,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse and validate a settings document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("master_volume", self.master_volume),
            ("sfx_volume", self.sfx_volume),
            ("music_volume", self.music_volume),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfRange {
                    name,
                    value: value as f64,
                    expected: "0.0 ..= 1.0",
                });
            }
        }
        self.tuning.validate()
    }

    /// Effective sound effect volume (respects mute)
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Effective music volume (respects mute)
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    /// Page element holding the optional settings document
    #[cfg(target_arch = "wasm32")]
    const CONFIG_ELEMENT_ID: &'static str = "game-config";
    /// Environment variable naming a settings file for native runs
    #[cfg(not(target_arch = "wasm32"))]
    const CONFIG_ENV_VAR: &'static str = "CUBE_DODGE_CONFIG";

    /// Load settings from the page's config element (WASM only)
    ///
    /// Falls back to defaults when the element is missing or invalid.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) => Self::from_json_or_default(&json),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from the file named by `CUBE_DODGE_CONFIG` (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::CONFIG_ENV_VAR) else {
            log::debug!("{} not set, using default settings", Self::CONFIG_ENV_VAR);
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(json) => Self::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Failed to read {}: {} - using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Parse a settings document, logging and falling back to defaults on error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings from page config");
                settings
            }
            Err(e) => {
                log::warn!("Ignoring game config: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_nested_tuning_override() {
        let settings =
            Settings::from_json(r#"{ "music_volume": 0.5, "tuning": { "spawn_rate_start": 100 } }"#)
                .unwrap();
        assert_eq!(settings.music_volume, 0.5);
        assert_eq!(settings.tuning.spawn_rate_start, 100);
        assert_eq!(settings.tuning.spawn_rate_floor, 20);
    }

    #[test]
    fn test_invalid_volume_rejected() {
        let err = Settings::from_json(r#"{ "sfx_volume": 2.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { name: "sfx_volume", .. }));
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        assert!(Settings::from_json(r#"{ "tuning": { "bonus_chance": -0.1 } }"#).is_err());
    }

    #[test]
    fn test_malformed_falls_back_to_default() {
        let settings = Settings::from_json_or_default("{ not json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_effective_volumes() {
        let mut settings = Settings::default();
        assert!((settings.effective_music_volume() - MUSIC_VOLUME).abs() < 1e-6);
        assert!((settings.effective_sfx_volume() - 1.0).abs() < 1e-6);

        settings.master_volume = 0.5;
        assert!((settings.effective_music_volume() - 0.5 * MUSIC_VOLUME).abs() < 1e-6);

        settings.muted = true;
        assert_eq!(settings.effective_sfx_volume(), 0.0);
        assert_eq!(settings.effective_music_volume(), 0.0);
    }
}
