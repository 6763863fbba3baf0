//! # DiagramScene Settings
//!
//! Configuration file handling for the diagram editor: canvas defaults,
//! context-menu wording and logging level. Files are TOML or JSON, chosen by
//! extension, and live in the platform configuration directory.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, Config, ContextMenuSettings, LoggingSettings};
pub use error::{SettingsError, SettingsResult};
