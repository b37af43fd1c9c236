//! Runtime settings
//!
//! Read once at startup from an optional JSON file in the working directory.
//! Every field has a default, so partial files are fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Settings file looked up by [`Settings::load`]
pub const SETTINGS_FILE: &str = "calm_flight.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Initial client width in pixels
    pub window_width: usize,
    /// Initial client height in pixels
    pub window_height: usize,
    pub title: String,
    /// Frame rate cap; 0 runs uncapped
    pub target_fps: usize,
    /// Draw an FPS counter in the corner
    pub show_fps: bool,
    /// Fixed RNG seed; random per run when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 960,
            window_height: 600,
            title: "Calm Flight".to_string(),
            target_fps: 120,
            show_fps: false,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from `path`
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load [`SETTINGS_FILE`], falling back to defaults
    pub fn load() -> Self {
        let path = Path::new(SETTINGS_FILE);
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }

        match Self::from_path(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", SETTINGS_FILE);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", SETTINGS_FILE, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.window_width, 960);
        assert_eq!(settings.window_height, 600);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "show_fps": true, "seed": 7 }"#).unwrap();
        assert!(settings.show_fps);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.window_width, 960);
        assert_eq!(settings.title, "Calm Flight");
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings {
            window_width: 1280,
            target_fps: 0,
            ..Settings::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(
            Settings::from_json("{ window_width: }"),
            Err(Error::Settings(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            Settings::from_path("definitely/not/here.json"),
            Err(Error::Io(_))
        ));
    }
}
