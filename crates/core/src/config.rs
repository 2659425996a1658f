//! Configuration path utilities for envelope.
//!
//! This module provides functions for resolving the settings file path and the
//! directory env files live in, expanding shell variables like `~`.

use std::path::PathBuf;

/// Default path for the settings file
const DEFAULT_SETTINGS_PATH: &str = "~/.envelope/settings.yml";

/// Resolves the settings file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// settings path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use envelope_core::config::get_settings_path;
///
/// let default_path = get_settings_path(None);
/// assert!(default_path.ends_with("settings.yml"));
///
/// let custom_path = get_settings_path(Some("/etc/envelope.yml"));
/// assert_eq!(custom_path, "/etc/envelope.yml");
/// ```
#[must_use]
pub fn get_settings_path(settings_path_arg: Option<&str>) -> String {
    let settings_path = settings_path_arg.unwrap_or(DEFAULT_SETTINGS_PATH);

    shellexpand::tilde(settings_path).to_string()
}

/// Resolves the directory holding env files.
///
/// The command-line value wins over the settings value. With neither, env files are
/// resolved against the current working directory (an empty path).
#[must_use]
pub fn resolve_directory(directory_arg: Option<&str>, settings_directory: Option<&str>) -> PathBuf {
    match directory_arg.or(settings_directory) {
        Some(directory) => PathBuf::from(shellexpand::tilde(directory).to_string()),
        None => PathBuf::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_settings_path_with_custom_path() {
        let result = get_settings_path(Some("/custom/path/settings.yml"));
        assert_eq!(result, "/custom/path/settings.yml");
    }

    #[test]
    fn test_get_settings_path_with_none() {
        let result = get_settings_path(None);
        // Should expand the tilde in the default path
        assert!(result.contains("settings.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_resolve_directory_prefers_argument() {
        let result = resolve_directory(Some("/from/args"), Some("/from/settings"));
        assert_eq!(result, PathBuf::from("/from/args"));
    }

    #[test]
    fn test_resolve_directory_falls_back_to_settings() {
        let result = resolve_directory(None, Some("/from/settings"));
        assert_eq!(result, PathBuf::from("/from/settings"));
    }

    #[test]
    fn test_resolve_directory_expands_tilde() {
        let result = resolve_directory(Some("~/envs"), None);
        assert!(!result.starts_with("~"));
        assert!(result.ends_with("envs"));
    }

    #[test]
    fn test_resolve_directory_defaults_to_current() {
        assert_eq!(resolve_directory(None, None), PathBuf::new());
    }
}
