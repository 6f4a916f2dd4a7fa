//! Error types for AndyBee Core

use thiserror::Error;

/// Main error type for workspace orchestration
#[derive(Error, Debug)]
pub enum Error {
    #[error("Dialog error: {0}")]
    Dialog(#[from] DialogError),

    #[error("Collaborator error: {0}")]
    Collaborator(#[from] CollaboratorError),

    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Dialog lifecycle errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DialogError {
    #[error("Another dialog is already in flight: {0}")]
    Busy(String),

    #[error("Unexpected payload for {dialog}: got {payload}")]
    UnexpectedPayload { dialog: String, payload: String },
}

/// Errors reported by an external collaborator service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    #[error("Database service failed: {0}")]
    Database(String),

    #[error("Catalog service failed: {0}")]
    Catalog(String),

    #[error("Filter service failed: {0}")]
    FilterService(String),

    #[error("Preference service failed: {0}")]
    Preferences(String),

    #[error("GPX service failed: {0}")]
    Gpx(String),
}

/// Filter list errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Filter index {index} out of range (list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Settings loading errors
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("No configuration directory available on this platform")]
    NoConfigDir,

    #[error("Invalid settings file {path}: {reason}")]
    Invalid { path: String, reason: String },
}

impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_nests_domain_message() {
        let err: Error = FilterError::IndexOutOfRange { index: 4, len: 2 }.into();
        assert_eq!(
            err.to_string(),
            "Filter error: Filter index 4 out of range (list has 2 entries)"
        );
    }

    #[test]
    fn test_error_serializes_as_string() {
        let err: Error = DialogError::Busy("preferences".into()).into();
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(
            json,
            "\"Dialog error: Another dialog is already in flight: preferences\""
        );
    }
}
