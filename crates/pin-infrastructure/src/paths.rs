//! Unified path management for Pin files.

use std::path::PathBuf;

use pin_core::error::{PinError, Result};

const APP_DIR: &str = "pin";

/// Resolves where Pin keeps its settings and stored blobs.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/pin/               # Config directory
/// └── config.toml              # PinSettings
///
/// ~/.local/share/pin/          # Data directory (default store root)
/// ├── pin_session.json
/// ├── pin_demo_login.json
/// ├── pin_state_v1.json
/// ├── pin_admin_config_v1.json
/// └── pin_admin_audit_v1.json
/// ```
pub struct PinPaths;

impl PinPaths {
    /// Returns the Pin configuration directory (e.g. `~/.config/pin/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| PinError::config("Cannot determine config directory"))
    }

    /// Returns the default data directory (e.g. `~/.local/share/pin/`).
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| PinError::config("Cannot determine data directory"))
    }

    /// Returns the path to the settings file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Picks the store root: an explicit override first, then the settings
    /// value, then the platform data directory.
    pub fn resolve_data_dir(
        explicit: Option<PathBuf>,
        configured: Option<PathBuf>,
    ) -> Result<PathBuf> {
        match explicit.or(configured) {
            Some(dir) => Ok(dir),
            None => Self::data_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let dir = PinPaths::resolve_data_dir(
            Some(PathBuf::from("/tmp/explicit")),
            Some(PathBuf::from("/tmp/configured")),
        )
        .unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/explicit"));
    }

    #[test]
    fn test_configured_dir_used_without_override() {
        let dir = PinPaths::resolve_data_dir(None, Some(PathBuf::from("/tmp/configured"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/configured"));
    }
}
