//! Configuration and settings management for DiagramScene
//!
//! Configuration is organized into logical sections:
//! - Canvas settings (initial size and zoom)
//! - Context menu wording
//! - Logging level

use crate::error::{SettingsError, SettingsResult};
use diagramscene_core::constants::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, MAX_ZOOM, MIN_ZOOM, PASTE_LABEL,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "diagramscene";
const CONFIG_FILE: &str = "config.toml";

/// Canvas settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Initial canvas width in pixels
    pub width: f64,
    /// Initial canvas height in pixels
    pub height: f64,
    /// Zoom applied when the canvas opens
    pub initial_zoom: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            initial_zoom: 1.0,
        }
    }
}

/// Context menu settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextMenuSettings {
    /// Label shown for the paste entry
    pub paste_label: String,
}

impl Default for ContextMenuSettings {
    fn default() -> Self {
        Self {
            paste_label: PASTE_LABEL.to_string(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive when RUST_LOG is unset (e.g. "info", "debug")
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub canvas: CanvasSettings,
    pub context_menu: ContextMenuSettings,
    pub logging: LoggingSettings,
}

enum Format {
    Toml,
    Json,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(SettingsError::UnsupportedFormat(path.display().to_string())),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform configuration directory for the application.
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR))
            .ok_or_else(|| SettingsError::ConfigDirectory("no config directory on this platform".into()))
    }

    /// Default configuration file path.
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load configuration from a `.toml` or `.json` file.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded settings");
        Ok(config)
    }

    /// Load from `path` if it exists; a missing file yields defaults.
    ///
    /// A file that exists but cannot be read, parsed or validated is an
    /// error, so the caller can report it once logging is up.
    pub fn load_if_exists(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save configuration, creating parent directories as needed.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.canvas.width > 0.0 && self.canvas.height > 0.0) {
            return Err(SettingsError::invalid(
                "canvas.width/height",
                "canvas dimensions must be > 0",
            ));
        }

        let zoom = self.canvas.initial_zoom;
        if !(zoom > MIN_ZOOM && zoom < MAX_ZOOM) {
            return Err(SettingsError::invalid(
                "canvas.initial_zoom",
                format!("zoom must be between {} and {}", MIN_ZOOM, MAX_ZOOM),
            ));
        }

        if self.context_menu.paste_label.trim().is_empty() {
            return Err(SettingsError::invalid(
                "context_menu.paste_label",
                "label must not be empty",
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(SettingsError::invalid("logging.level", "level must not be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.context_menu.paste_label, "Paste");
        assert_eq!(config.canvas.initial_zoom, 1.0);
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.canvas.initial_zoom = 2.5;
        config.context_menu.paste_label = "Einfügen".to_string();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.logging.level = "debug".to_string();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.logging.level, "debug");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[context_menu]\npaste_label = \"Coller\"\n").unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.context_menu.paste_label, "Coller");
        assert_eq!(loaded.canvas, CanvasSettings::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = Config::default();
        config.canvas.width = 0.0;
        assert!(matches!(
            config.validate(),
            Err(SettingsError::InvalidSetting { .. })
        ));

        let mut config = Config::default();
        config.canvas.initial_zoom = 75.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.context_menu.paste_label = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ini");
        let err = Config::default().save_to_file(&path).unwrap_err();
        assert!(matches!(err, SettingsError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_if_exists_on_missing_and_broken_files() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert_eq!(Config::load_if_exists(&missing).unwrap(), Config::default());

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[canvas\nwidth = ").unwrap();
        assert!(matches!(
            Config::load_if_exists(&broken),
            Err(SettingsError::TomlError(_))
        ));
    }

    #[test]
    fn test_invalid_setting_maps_to_configuration_error() {
        let err: diagramscene_core::Error = SettingsError::invalid("x", "y").into();
        assert!(err.is_configuration());
    }
}
