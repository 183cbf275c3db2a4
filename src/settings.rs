//! Runtime settings
//!
//! Loaded from a JSON file; every field is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Simulation and demo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Trigger urchins when the hero walks into their active radius
    pub proximity_activation: bool,
    /// Report hero contacts with urchins and items
    pub contact_events: bool,
    /// Ticks the demo binary simulates before exiting
    pub demo_ticks: u32,
    /// Seed for generated scenes (None = derive from the clock)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            proximity_activation: true,
            contact_events: true,
            demo_ticks: 600,
            seed: None,
        }
    }
}

impl Settings {
    /// Environment variable holding the settings file path
    pub const ENV_VAR: &'static str = "URCHIN_SETTINGS";

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the file named by `URCHIN_SETTINGS`, falling back to defaults
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Failed to load settings from {}: {} - using defaults", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{"demo_ticks": 10, "seed": 7}"#).unwrap();
        assert_eq!(settings.demo_ticks, 10);
        assert_eq!(settings.seed, Some(7));
        assert!(settings.proximity_activation);
        assert!(settings.contact_events);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
