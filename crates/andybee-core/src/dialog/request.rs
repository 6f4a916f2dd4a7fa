//! Dialog requests: which view to present and what it is seeded with

use super::instance::DialogInstance;
use crate::error::DialogError;
use crate::filter::FilterManagementController;
use crate::types::{Filter, GpxExportRequest, GpxImportRequest, Preferences};
use uuid::Uuid;

// ============================================================================
// Dialog Kinds
// ============================================================================

/// Every modal workflow the workspace can launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogKind {
    OpenDatabase,
    Preferences,
    ImportGpx,
    ExportGpx,
    QuickFilter,
    ManageFilters,
}

impl DialogKind {
    /// View template the presenter renders for this dialog
    pub fn view(&self) -> &'static str {
        match self {
            Self::OpenDatabase => "geocaches/opendb",
            Self::Preferences => "preferences/pref",
            Self::ImportGpx => "gpx/import",
            Self::ExportGpx => "gpx/export",
            Self::QuickFilter => "filter/basic",
            Self::ManageFilters => "filter/manage",
        }
    }

    /// Name the view binds its controller under
    pub fn controller_as(&self) -> &'static str {
        match self {
            Self::OpenDatabase => "opendb",
            Self::Preferences => "pref",
            Self::ImportGpx => "import",
            Self::ExportGpx => "export",
            Self::QuickFilter => "basic",
            Self::ManageFilters => "manage",
        }
    }
}

impl std::fmt::Display for DialogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::OpenDatabase => "open-database",
            Self::Preferences => "preferences",
            Self::ImportGpx => "import-gpx",
            Self::ExportGpx => "export-gpx",
            Self::QuickFilter => "quick-filter",
            Self::ManageFilters => "manage-filters",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Seed Data
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDatabaseInput {
    pub dbs: Vec<String>,
    pub selected: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreferencesInput {
    /// Detached copy; the service only changes on confirmation
    pub data: Preferences,
    pub dbs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuickFilterInput {
    pub filter: Filter,
}

/// Pre-resolved input, frozen before the dialog opens
#[derive(Debug)]
pub enum DialogInput {
    OpenDatabase(OpenDatabaseInput),
    Preferences(PreferencesInput),
    ImportGpx,
    ExportGpx,
    QuickFilter(QuickFilterInput),
    ManageFilters(FilterManagementController),
}

impl DialogInput {
    pub fn kind(&self) -> DialogKind {
        match self {
            Self::OpenDatabase(_) => DialogKind::OpenDatabase,
            Self::Preferences(_) => DialogKind::Preferences,
            Self::ImportGpx => DialogKind::ImportGpx,
            Self::ExportGpx => DialogKind::ExportGpx,
            Self::QuickFilter(_) => DialogKind::QuickFilter,
            Self::ManageFilters(_) => DialogKind::ManageFilters,
        }
    }
}

// ============================================================================
// Confirmation Payloads
// ============================================================================

/// Value a dialog hands back when confirmed
#[derive(Debug, Clone, PartialEq)]
pub enum DialogPayload {
    DatabaseName(String),
    Preferences(Preferences),
    GpxImport(GpxImportRequest),
    GpxExport(GpxExportRequest),
    Filter(Filter),
    Empty,
}

impl DialogPayload {
    fn describe(&self) -> &'static str {
        match self {
            Self::DatabaseName(_) => "database name",
            Self::Preferences(_) => "preferences",
            Self::GpxImport(_) => "gpx import request",
            Self::GpxExport(_) => "gpx export request",
            Self::Filter(_) => "filter",
            Self::Empty => "empty payload",
        }
    }

    fn mismatch(&self, dialog: DialogKind) -> DialogError {
        DialogError::UnexpectedPayload {
            dialog: dialog.to_string(),
            payload: self.describe().to_string(),
        }
    }

    pub fn into_database_name(self) -> Result<String, DialogError> {
        match self {
            Self::DatabaseName(name) => Ok(name),
            other => Err(other.mismatch(DialogKind::OpenDatabase)),
        }
    }

    pub fn into_preferences(self) -> Result<Preferences, DialogError> {
        match self {
            Self::Preferences(data) => Ok(data),
            other => Err(other.mismatch(DialogKind::Preferences)),
        }
    }

    pub fn into_gpx_import(self) -> Result<GpxImportRequest, DialogError> {
        match self {
            Self::GpxImport(request) => Ok(request),
            other => Err(other.mismatch(DialogKind::ImportGpx)),
        }
    }

    pub fn into_gpx_export(self) -> Result<GpxExportRequest, DialogError> {
        match self {
            Self::GpxExport(request) => Ok(request),
            other => Err(other.mismatch(DialogKind::ExportGpx)),
        }
    }

    pub fn into_filter(self) -> Result<Filter, DialogError> {
        match self {
            Self::Filter(filter) => Ok(filter),
            other => Err(other.mismatch(DialogKind::QuickFilter)),
        }
    }
}

// ============================================================================
// Request
// ============================================================================

/// One dialog invocation handed to the presenter.
///
/// Lives from launch until the dialog closes; the presenter settles it
/// through `instance`.
#[derive(Debug)]
pub struct DialogRequest {
    pub id: Uuid,
    pub animated: bool,
    pub input: DialogInput,
    pub instance: DialogInstance,
}

impl DialogRequest {
    pub fn kind(&self) -> DialogKind {
        self.input.kind()
    }

    pub fn view(&self) -> &'static str {
        self.kind().view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_descriptors() {
        assert_eq!(DialogKind::Preferences.view(), "preferences/pref");
        assert_eq!(DialogKind::Preferences.controller_as(), "pref");
        assert_eq!(DialogKind::ManageFilters.view(), "filter/manage");
        assert_eq!(DialogKind::OpenDatabase.controller_as(), "opendb");
    }

    #[test]
    fn test_payload_conversion() {
        let name = DialogPayload::DatabaseName("home.db".into())
            .into_database_name()
            .unwrap();
        assert_eq!(name, "home.db");
    }

    #[test]
    fn test_payload_mismatch_names_both_sides() {
        let err = DialogPayload::Empty.into_filter().unwrap_err();
        assert_eq!(
            err,
            DialogError::UnexpectedPayload {
                dialog: "quick-filter".into(),
                payload: "empty payload".into(),
            }
        );
    }
}
