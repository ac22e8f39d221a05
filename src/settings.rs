//! Game settings and preferences
//!
//! Loaded from a JSON file at startup; a missing or broken file falls back
//! to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Default settings file name, looked up in the working directory
pub const SETTINGS_FILE: &str = "sticky_cubes.json";

/// Default save file name
pub const SAVE_FILE: &str = "save.dat";

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence all cues
    pub muted: bool,

    // === Storage ===
    /// Where progress is saved (defaults to `save.dat` next to the executable)
    pub save_path: Option<PathBuf>,

    // === Balance ===
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            save_path: None,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str::<Settings>(&json) {
            Ok(mut settings) => {
                settings.tuning = settings.tuning.sanitized();
                settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
                settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring invalid settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Resolved save file location
    pub fn save_path(&self) -> PathBuf {
        if let Some(path) = &self.save_path {
            return path.clone();
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(SAVE_FILE)))
            .unwrap_or_else(|| PathBuf::from(SAVE_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("sticky-cubes-no-such-settings.json");
        let settings = Settings::load(&path);
        assert_eq!(settings.master_volume, 0.8);
        assert!(!settings.muted);
        assert_eq!(settings.tuning, Tuning::default());
    }

    #[test]
    fn test_load_clamps_and_sanitizes() {
        let path = std::env::temp_dir().join(format!(
            "sticky-cubes-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"{"master_volume": 3.0, "muted": true, "tuning": {"spawn_interval": -1.0}}"#,
        )
        .unwrap();

        let settings = Settings::load(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(settings.master_volume, 1.0);
        assert!(settings.muted);
        assert_eq!(settings.tuning.spawn_interval, Tuning::default().spawn_interval);
    }

    #[test]
    fn test_explicit_save_path_wins() {
        let settings = Settings {
            save_path: Some(PathBuf::from("/tmp/custom.dat")),
            ..Default::default()
        };
        assert_eq!(settings.save_path(), PathBuf::from("/tmp/custom.dat"));
    }
}
