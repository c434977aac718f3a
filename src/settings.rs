use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::shapes::{Rgb, SELECTED_COLOR};

/// Returns the path to the settings file: `~/.config/figure-lab/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("figure-lab");
    path.push("settings.json");
    path
}

/// Persisted application settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files. Figures themselves are never saved.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    // Window
    pub window_width: f32,
    pub window_height: f32,
    pub title: String,
    pub fps: u32,
    pub show_settings: bool,

    // Editing steps
    pub rotation_step: f32,
    pub move_step: f32,
    pub grow_factor: f32,
    pub shrink_factor: f32,
    pub curve_degree: usize,

    // Display
    pub background: Rgb,
    pub selected_color: Rgb,
    pub show_grid: bool,
    pub line_width: f32,

    /// Figure selected at startup, by name ("Plane", "Tree", "Heart")
    pub initial_selection: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            window_width: 1000.0,
            window_height: 800.0,
            title: "Figure Lab".to_string(),
            fps: 60,
            show_settings: false,

            rotation_step: 5.0,
            move_step: 5.0,
            grow_factor: 1.1,
            shrink_factor: 0.9,
            curve_degree: 2,

            background: [0.1, 0.2, 0.2],
            selected_color: SELECTED_COLOR,
            show_grid: true,
            line_width: 1.5,

            initial_selection: None,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    fn from_json(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str(contents)
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        let path = settings_path();
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    log::warn!("Failed to write settings: {}", e);
                } else {
                    log::info!("Saved settings to {}", path.display());
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_controls() {
        let s = AppSettings::default();
        assert_eq!(s.fps, 60);
        assert_eq!(s.rotation_step, 5.0);
        assert_eq!(s.move_step, 5.0);
        assert_eq!(s.grow_factor, 1.1);
        assert_eq!(s.shrink_factor, 0.9);
        assert_eq!(s.curve_degree, 2);
        assert_eq!(s.selected_color, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let s = AppSettings::from_json(r#"{ "curve_degree": 3, "title": "Lab" }"#).unwrap();
        assert_eq!(s.curve_degree, 3);
        assert_eq!(s.title, "Lab");
        assert_eq!(s.fps, 60);
        assert_eq!(s.initial_selection, None);
    }

    #[test]
    fn test_json_round_trip() {
        let s = AppSettings {
            initial_selection: Some("Heart".to_string()),
            background: [0.0, 0.0, 0.0],
            ..AppSettings::default()
        };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(AppSettings::from_json(&json).unwrap(), s);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(AppSettings::from_json("{ not json").is_err());
    }
}
