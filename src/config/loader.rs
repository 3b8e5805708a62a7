use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::config::ConfigStore;
use crate::error::Error;

/// File-backed application settings
///
/// Settings live in a flat `[settings]` string table:
///
/// ```toml
/// [settings]
/// default_color = "teal"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    settings: HashMap<String, String>,
}

impl Settings {
    /// Parse settings from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    /// Merge two settings tables, with `other` taking precedence
    pub fn merge(mut self, other: Settings) -> Settings {
        self.settings.extend(other.settings);
        self
    }
}

impl ConfigStore for Settings {
    fn get(&self, key: &str, default: &str) -> String {
        self.settings
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }
}

/// Load global settings from ~/.config/taskpalette/config.toml
fn load_global_settings() -> Result<Option<Settings>, Error> {
    let config_path = dirs::config_dir().map(|p| p.join("taskpalette").join("config.toml"));

    if let Some(path) = config_path {
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            return Ok(Some(Settings::from_toml_str(&content)?));
        }
    }

    Ok(None)
}

/// Load local settings from .taskpalette/config.toml in the start directory
/// or any of its parents
fn load_local_settings(start_path: &Path) -> Result<Option<Settings>, Error> {
    let mut current = start_path.to_path_buf();

    loop {
        let config_path = current.join(".taskpalette").join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            return Ok(Some(Settings::from_toml_str(&content)?));
        }

        if !current.pop() {
            break;
        }
    }

    Ok(None)
}

/// Load and merge settings (global + local), local keys winning
pub fn load_settings() -> Result<Settings, Error> {
    let current_dir = std::env::current_dir()?;
    load_settings_from(&current_dir)
}

/// Load and merge settings, searching for local config from `start_path`
pub fn load_settings_from(start_path: &Path) -> Result<Settings, Error> {
    let global = load_global_settings()?.unwrap_or_default();
    let local = load_local_settings(start_path)?.unwrap_or_default();

    Ok(global.merge(local))
}
