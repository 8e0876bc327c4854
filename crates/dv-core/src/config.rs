//! Settings parser for `.delta-vision/config.toml`
//!
//! Settings are read-only here: the host owns persisting theme choices.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::prelude::*;

pub const CONFIG_DIR: &str = ".delta-vision";
pub const CONFIG_FILENAME: &str = "config.toml";

/// Top-level settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    /// Directory the settings were loaded from; relative paths resolve
    /// against it
    #[serde(skip)]
    pub config_dir: Option<PathBuf>,
}

/// UI settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UiSettings {
    /// Theme to activate at startup
    #[serde(default)]
    pub theme: Option<String>,

    /// Extra theme files (`.toml` / `.json`)
    #[serde(default)]
    pub themes_dir: Option<PathBuf>,
}

impl Settings {
    /// Resolved theme directory, if one is configured
    pub fn themes_dir(&self) -> Option<PathBuf> {
        let dir = self.ui.themes_dir.as_ref()?;
        match &self.config_dir {
            Some(base) if dir.is_relative() => Some(base.join(dir)),
            _ => Some(dir.clone()),
        }
    }
}

/// Load settings from `<base>/.delta-vision/config.toml`.
///
/// A missing file gives defaults. An unreadable or invalid file is logged
/// and also gives defaults, so a typo never blocks startup.
pub fn load_settings(base: &Path) -> Settings {
    let config_dir = base.join(CONFIG_DIR);
    let config_path = config_dir.join(CONFIG_FILENAME);

    let mut settings = if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        Settings::default()
    } else {
        match std::fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str::<Settings>(&content) {
                Ok(settings) => {
                    debug!("Loaded settings from {:?}", config_path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse {:?}: {}", config_path, e);
                    Settings::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {:?}: {}", config_path, e);
                Settings::default()
            }
        }
    };

    settings.config_dir = Some(config_dir);
    settings
}

/// Load settings from the user's home directory
pub fn load_user_settings() -> Settings {
    match dirs::home_dir() {
        Some(home) => load_settings(&home),
        None => {
            warn!("Could not determine home directory, using default settings");
            Settings::default()
        }
    }
}
