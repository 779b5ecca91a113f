//! Gallery settings persistence
//!
//! Handles saving and loading the demo's preferences as JSON in the platform
//! config directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::DEFAULT_ROTATION_STEP;
use crate::ui::animation::GLYPH_DURATION;
use crate::ui::styles::StyleKind;

/// Demo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Ring stroke width in logical pixels
    pub stroke_width: f32,
    /// Style of the featured progress view
    pub style: StyleKind,
    /// Rotation per frame of the rotating style, in radians
    pub rotation_step: f32,
    /// Interval of the simulated progress timer
    pub timer_interval_ms: u64,
    /// Progress added on every timer tick
    pub progress_step: f32,
    /// Duration of the glyph draw-on animation
    pub glyph_duration_ms: u64,
    /// Window settings
    pub window: WindowSettings,
}

/// Window size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 420.0,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stroke_width: 8.0,
            style: StyleKind::default(),
            rotation_step: DEFAULT_ROTATION_STEP,
            timer_interval_ms: 100,
            progress_step: 0.01,
            glyph_duration_ms: GLYPH_DURATION.as_millis() as u64,
            window: WindowSettings::default(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "circular-progress", "CircularProgress")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Using default settings ({:?}): {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::file_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to_file(&path)
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }

    pub fn timer_interval(&self) -> Duration {
        Duration::from_millis(self.timer_interval_ms)
    }

    pub fn glyph_duration(&self) -> Duration {
        Duration::from_millis(self.glyph_duration_ms)
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    Io(String),
    Parse(String),
    NoConfigDir,
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
            SettingsError::NoConfigDir => write!(f, "Could not determine config directory"),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("circular-progress-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_file("round_trip.json");
        let settings = Settings {
            stroke_width: 12.0,
            style: StyleKind::Rotating,
            ..Settings::default()
        };

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "style": "interactive" }"#).unwrap();
        assert_eq!(settings.style, StyleKind::Interactive);
        assert_eq!(settings.stroke_width, 8.0);
        assert_eq!(settings.rotation_step, DEFAULT_ROTATION_STEP);
        assert_eq!(settings.window, WindowSettings::default());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Settings::load_from_file(&temp_file("does_not_exist.json"));
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let path = temp_file("invalid.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        let result = Settings::load_from_file(&path);
        assert!(matches!(result, Err(SettingsError::Parse(_))));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_durations() {
        let settings = Settings::default();
        assert_eq!(settings.timer_interval(), Duration::from_millis(100));
        assert_eq!(settings.glyph_duration(), GLYPH_DURATION);
    }
}
