//! Application settings loaded from `config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use pin_core::error::Result;
use serde::{Deserialize, Serialize};

use crate::paths::PinPaths;

/// Default tracing filter when neither flag nor environment sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Settings read from `~/.config/pin/config.toml`.
///
/// Every field is optional; a missing file yields the defaults.
///
/// ```toml
/// data_dir = "/var/lib/pin"
/// log_level = "info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinSettings {
    /// Store root override.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for PinSettings {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_level: default_log_level(),
        }
    }
}

impl PinSettings {
    /// Loads settings from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&PinPaths::config_file()?)
    }

    /// Loads settings from `path`, returning defaults when the file is absent
    /// or empty. A file that exists but does not parse is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = PinSettings::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(settings, PinSettings::default());
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_load_values() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "data_dir = \"/srv/pin\"\nlog_level = \"debug\"\n").unwrap();

        let settings = PinSettings::load_from(&path).unwrap();
        assert_eq!(settings.data_dir, Some(PathBuf::from("/srv/pin")));
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "data_dir = \"/srv/pin\"\n").unwrap();

        let settings = PinSettings::load_from(&path).unwrap();
        assert_eq!(settings.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "data_dir = [").unwrap();

        let err = PinSettings::load_from(&path).unwrap_err();
        assert!(err.is_serialization());
    }
}
