use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::DrawConfig;
use crate::error::SettingsError;

/// Environment variable naming the settings file.
pub const CONFIG_ENV: &str = "STARZ_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "starz.json";

const DEFAULT_EXPORT_FILE: &str = "starz-drawing.png";
const DEFAULT_NARROW_BREAKPOINT: f32 = 768.0;
const DEFAULT_AD_COLUMN_WIDTH: f32 = 120.0;
const DEFAULT_GAP: f32 = 16.0;
const DEFAULT_MIN_CANVAS: f32 = 200.0;
const DEFAULT_HEIGHT_FRACTION: f32 = 0.65;
const DEFAULT_AD_CLIENT: &str = "ca-pub-9132155293089442";
const DEFAULT_LEFT_SLOT: &str = "1936554075";
const DEFAULT_RIGHT_SLOT: &str = "3293582365";

/// Where "Export as PNG" writes on native builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub directory: PathBuf,
    pub file_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            file_name: DEFAULT_EXPORT_FILE.to_owned(),
        }
    }
}

/// Responsive sizing constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Viewports narrower than this hide the ad columns.
    pub narrow_breakpoint: f32,
    pub ad_column_width: f32,
    pub gap: f32,
    pub min_canvas: f32,
    /// Largest share of the viewport height the canvas may take.
    pub height_fraction: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            narrow_breakpoint: DEFAULT_NARROW_BREAKPOINT,
            ad_column_width: DEFAULT_AD_COLUMN_WIDTH,
            gap: DEFAULT_GAP,
            min_canvas: DEFAULT_MIN_CANVAS,
            height_fraction: DEFAULT_HEIGHT_FRACTION,
        }
    }
}

/// Ad network identifiers. Only handed to the ad host; nothing else reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdSettings {
    pub enabled: bool,
    pub client_id: String,
    pub left_slot: String,
    pub right_slot: String,
}

impl Default for AdSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            client_id: DEFAULT_AD_CLIENT.to_owned(),
            left_slot: DEFAULT_LEFT_SLOT.to_owned(),
            right_slot: DEFAULT_RIGHT_SLOT.to_owned(),
        }
    }
}

/// Startup settings, read once from an optional JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Initial toolbar values
    pub draw: DrawConfig,
    pub export: ExportSettings,
    pub layout: LayoutSettings,
    pub ads: AdSettings,
}

impl Settings {
    pub fn parse(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&json)
    }

    /// `$STARZ_CONFIG`, or `starz.json` in the working directory.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load `path` if it exists. A missing file gives the defaults silently;
    /// an unreadable or malformed one gives the defaults with a warning.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Ignoring settings file: {}", err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ColorMode, DrawMode};
    use std::io::Write;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Settings::parse("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_nested_partial_values() {
        let settings = Settings::parse(
            r##"{
                "draw": { "point_count": 48, "mode": "corners", "color_mode": "gradient" },
                "export": { "file_name": "mine.png" },
                "ads": { "enabled": false }
            }"##,
        )
        .unwrap();
        assert_eq!(settings.draw.point_count, 48);
        assert_eq!(settings.draw.mode, DrawMode::Corners);
        assert_eq!(settings.draw.color_mode, ColorMode::Gradient);
        assert_eq!(settings.export.file_name, "mine.png");
        assert_eq!(settings.export.directory, PathBuf::from("."));
        assert!(!settings.ads.enabled);
        assert_eq!(settings.layout, LayoutSettings::default());
    }

    #[test]
    fn test_bad_color_is_a_parse_error() {
        let result = Settings::parse(r#"{ "draw": { "solid_color": "blue" } }"#);
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_or_default(&dir.path().join("absent.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_or_default_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("starz.json");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"{ not json")
            .unwrap();
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("starz.json");
        let mut settings = Settings::default();
        settings.draw.point_count = 7;
        std::fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }
}
