//! Console settings
//!
//! Read once at boot from a JSON file next to the binary. Anything missing
//! falls back to the default; a missing or unreadable file means all defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{GAME_SPEED_MS, TILT_DEADBAND, TILT_FILTER_ALPHA};

/// Settings file path when none is given on the command line
pub const DEFAULT_SETTINGS_PATH: &str = "tilt_arcade.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Timing ===
    /// Sleep between game ticks
    pub game_speed_ms: u32,

    // === Tilt ===
    /// Low-pass weight of the newest sample
    pub filter_alpha: f32,
    /// Dead zone around level, in g
    pub deadband: f32,

    // === Audio ===
    pub sound_enabled: bool,

    // === Storage ===
    /// High score file
    pub scores_path: String,

    // === Host only ===
    /// Multiplier on real sleeps; 0 runs flat out
    pub time_scale: f32,
    /// Stop the demo after this many controller steps
    pub max_steps: Option<u64>,
    /// Print every presented frame
    pub show_frames: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game_speed_ms: GAME_SPEED_MS,
            filter_alpha: TILT_FILTER_ALPHA,
            deadband: TILT_DEADBAND,
            sound_enabled: true,
            scores_path: "tilt_arcade_scores.json".to_string(),
            time_scale: 1.0,
            max_steps: None,
            show_frames: false,
        }
    }
}

impl Settings {
    /// Parse and sanitize a settings file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        Ok(settings.sanitized())
    }

    /// Load settings, falling back to defaults
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Clamp tuning values into their working ranges
    pub fn sanitized(mut self) -> Self {
        self.filter_alpha = if self.filter_alpha.is_nan() {
            TILT_FILTER_ALPHA
        } else {
            self.filter_alpha.clamp(0.01, 1.0)
        };
        self.deadband = if self.deadband.is_nan() {
            TILT_DEADBAND
        } else {
            self.deadband.clamp(0.0, 1.0)
        };
        if !(self.time_scale >= 0.0) {
            self.time_scale = 0.0;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_consts() {
        let settings = Settings::default();
        assert_eq!(settings.game_speed_ms, 300);
        assert_eq!(settings.filter_alpha, 0.2);
        assert_eq!(settings.deadband, 0.3);
        assert!(settings.sound_enabled);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"game_speed_ms": 150, "sound_enabled": false}"#).unwrap();
        let settings = Settings::load(&path);
        assert_eq!(settings.game_speed_ms, 150);
        assert!(!settings.sound_enabled);
        assert_eq!(settings.deadband, 0.3);
    }

    #[test]
    fn test_bad_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ nope").unwrap();
        assert!(matches!(Settings::from_file(&path), Err(SettingsError::Parse(_))));
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            max_steps: Some(40),
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
    }

    #[test]
    fn test_sanitize_clamps() {
        let settings = Settings {
            filter_alpha: 3.0,
            deadband: -1.0,
            time_scale: -2.0,
            ..Settings::default()
        }
        .sanitized();
        assert_eq!(settings.filter_alpha, 1.0);
        assert_eq!(settings.deadband, 0.0);
        assert_eq!(settings.time_scale, 0.0);
    }
}
