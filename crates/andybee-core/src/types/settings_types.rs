//! Workspace settings

use crate::error::{Result, SettingsError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Settings file name inside the per-user config directory
const SETTINGS_FILE: &str = "workspace.json";

/// Tunables for the workspace orchestrator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkspaceSettings {
    /// Forwarded to every dialog request; presenters may skip open/close animation
    pub animate_dialogs: bool,
}

impl WorkspaceSettings {
    /// `<config dir>/andybee/workspace.json`
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("andybee").join(SETTINGS_FILE))
            .ok_or_else(|| SettingsError::NoConfigDir.into())
    }

    /// Load from the default per-user location
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path()?)
    }

    /// Load from a specific file. A missing file yields the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings file at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let settings = serde_json::from_str(&raw).map_err(|e| SettingsError::Invalid {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        info!("Loaded workspace settings from {:?}", path);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = WorkspaceSettings::load_from(dir.path().join("absent.json")).unwrap();
        assert_eq!(settings, WorkspaceSettings::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"animateDialogs": true}}"#).unwrap();

        let settings = WorkspaceSettings::load_from(file.path()).unwrap();
        assert_eq!(
            settings,
            WorkspaceSettings {
                animate_dialogs: true,
            }
        );
    }

    #[test]
    fn test_empty_object_yields_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let settings = WorkspaceSettings::load_from(file.path()).unwrap();
        assert_eq!(settings, WorkspaceSettings::default());
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = WorkspaceSettings::load_from(file.path());
        assert!(matches!(
            result,
            Err(Error::Settings(SettingsError::Invalid { .. }))
        ));
    }
}
