//! # DiagramScene
//!
//! A diagram editor whose canvas offers a right-click "Paste" that drops the
//! clipboard contents at the clicked scene position.
//!
//! ## Architecture
//!
//! DiagramScene is organized as a workspace with multiple crates:
//!
//! 1. **diagramscene-core** - Geometry, shared-state aliases, errors
//! 2. **diagramscene-canvas** - Viewport, items, editor, context-menu controller
//! 3. **diagramscene-settings** - Configuration files
//! 4. **diagramscene-ui** - GTK4 front end (feature `gtk`)
//! 5. **diagramscene** - Main binary that integrates all crates

use std::path::{Path, PathBuf};

pub use diagramscene_canvas as canvas;
pub use diagramscene_settings as settings;

pub use diagramscene_canvas::{
    ContextMenuController, ContextMenuEvent, ContextMenuOutcome, ContextMenuPresenter,
    DiagramEditor, DiagramItem, EntryHandle, ItemKind, MenuModel, PasteTarget, SceneView,
    Viewport,
};
pub use diagramscene_core::{Error, Point, Rect, Result};
pub use diagramscene_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Resolves which configuration file to use: an explicit path wins,
/// otherwise the platform default.
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Config::config_file_path().ok(),
    }
}

/// A configuration file that exists but could not be used.
#[derive(Debug)]
pub struct ConfigLoadFailure {
    pub path: PathBuf,
    pub error: SettingsError,
}

impl ConfigLoadFailure {
    /// Logs the failure. Call once a subscriber is installed.
    pub fn report(&self) {
        tracing::warn!(
            path = %self.path.display(),
            error = %self.error,
            "Failed to load settings, using defaults"
        );
    }
}

/// Loads configuration, falling back to defaults when the file is missing
/// or invalid.
///
/// Runs before logging is initialised, so an unusable file is returned
/// alongside the defaults instead of being logged here.
pub fn load_config(explicit: Option<&Path>) -> (Config, Option<ConfigLoadFailure>) {
    let Some(path) = config_path(explicit) else {
        return (Config::default(), None);
    };
    match Config::load_if_exists(&path) {
        Ok(config) => (config, None),
        Err(error) => (Config::default(), Some(ConfigLoadFailure { path, error })),
    }
}

/// Initialize logging
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, falling back to `default_level`
pub fn init_logging(default_level: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)?,
    };

    // In Windows GUI mode (release builds), log to a file instead of stdout
    #[cfg(all(target_os = "windows", not(debug_assertions)))]
    {
        use std::fs::OpenOptions;

        let log_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."));

        let log_file = log_dir.join("diagramscene.log");

        match OpenOptions::new().create(true).append(true).open(&log_file) {
            Ok(file) => {
                let fmt_layer = fmt::layer()
                    .with_writer(file)
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(true)
                    .with_ansi(false);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt_layer)
                    .try_init()?;
            }
            Err(_) => {
                tracing_subscriber::registry().with(env_filter).try_init()?;
            }
        }
    }

    #[cfg(not(all(target_os = "windows", not(debug_assertions))))]
    {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
