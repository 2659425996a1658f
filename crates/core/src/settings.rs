//! User settings read from a YAML file.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::file_handling::WriteMode;

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorDefinition {
    pub rgb: Option<(u8, u8, u8)>,
    pub ansi: Option<u8>,
    pub name: Option<String>,
}

/// Per-role colors. Roles left out keep the built-in color.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeDefinition {
    pub success: Option<ColorDefinition>,
    pub error: Option<ColorDefinition>,
    pub warning: Option<ColorDefinition>,
    pub info: Option<ColorDefinition>,
    pub prompt: Option<ColorDefinition>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory env files are resolved against.
    pub directory: Option<String>,
    pub atomic_writes: bool,
    pub banner: bool,
    pub clock: bool,
    pub theme: ThemeDefinition,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            directory: None,
            atomic_writes: true,
            banner: true,
            clock: true,
            theme: ThemeDefinition::default(),
        }
    }
}

impl Settings {
    #[must_use]
    pub fn write_mode(&self) -> WriteMode {
        WriteMode::from_atomic(self.atomic_writes)
    }
}

/// Loads settings from `settings_path`, falling back to defaults when the file
/// does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not valid YAML.
pub fn load_settings(settings_path: &str) -> Result<Settings> {
    if !Path::new(settings_path).exists() {
        debug!("No settings at `{}`, using defaults", settings_path);
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(settings_path)
        .map_err(|e| Error::io_error("reading settings", settings_path, e))?;

    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(&content).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "settings".to_string(),
            settings_path.to_string(),
            e,
        )
    })
}
