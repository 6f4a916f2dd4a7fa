//! Collaborator service traits
//!
//! Each trait is the interface boundary of a service owning one slice of
//! application state. The orchestrator and the filter management controller
//! only ever talk to these traits; implementations live with the UI host.

use crate::error::Result;
use crate::types::{
    Filter, FilterList, GpxExportRequest, GpxImportRequest, LogRecord, Preferences,
};
use async_trait::async_trait;
use std::sync::Arc;

// ============================================================================
// Filter State
// ============================================================================

/// Owner of the named filter list and of the active filter.
///
/// Index arguments refer to the list as currently exposed by `filter_list`.
/// An out-of-range index must be a no-op or an `Err`, never a panic.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FilterService: Send + Sync {
    /// Refresh the shared list from the backing store
    async fn read_list(&self) -> Result<()>;

    /// Create a filter with the given name; completes on success and failure alike
    async fn create_filter(&self, name: &str) -> Result<()>;

    /// Remove the entry at `index`
    async fn delete_filter(&self, index: usize) -> Result<()>;

    /// Launch the edit flow for the entry at `index`
    async fn edit_filter(&self, index: usize) -> Result<()>;

    /// Snapshot of the current list
    fn filter_list(&self) -> FilterList;

    /// The filter currently applied to the catalog, if any
    fn active_filter(&self) -> Option<Filter>;

    /// Replace the active filter
    fn set_active_filter(&self, filter: Filter);

    /// Suggested filter used to seed the quick-filter dialog
    fn resolve_filter(&self) -> Filter;
}

// ============================================================================
// Catalog
// ============================================================================

/// Owner of the loaded geocache dataset and the selected database name
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Replace the loaded dataset with the one stored in `db_name`
    async fn read_list(&self, db_name: &str) -> Result<()>;

    /// Re-evaluate the loaded dataset against the active filter
    fn on_filter_changed(&self);

    /// Currently selected database, `None` when nothing is open
    fn db_name(&self) -> Option<String>;
}

// ============================================================================
// Database Enumeration
// ============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseService: Send + Sync {
    /// Refresh the list of known databases
    async fn read(&self) -> Result<()>;

    /// Databases known after the last `read`
    fn db_list(&self) -> Vec<String>;
}

// ============================================================================
// Preferences
// ============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreferenceService: Send + Sync {
    /// Detached copy of the current values; editing it never touches the service
    fn data_copy(&self) -> Preferences;

    /// Persist new preference values
    async fn update(&self, data: Preferences) -> Result<()>;
}

// ============================================================================
// GPX Transfer
// ============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GpxService: Send + Sync {
    async fn import_gpx(&self, request: GpxImportRequest) -> Result<()>;

    async fn export_gpx(&self, request: GpxExportRequest) -> Result<()>;
}

// ============================================================================
// Logging Sink
// ============================================================================

/// User-visible failure reporting. Not to be confused with `tracing`
/// diagnostics: records sent here may be shown to the user.
#[cfg_attr(test, mockall::automock)]
pub trait LoggingService: Send + Sync {
    fn log(&self, record: LogRecord);
}

// ============================================================================
// Service Bundle
// ============================================================================

/// Collaborator handles injected into the orchestrator
#[derive(Clone)]
pub struct Services {
    pub catalog: Arc<dyn CatalogService>,
    pub database: Arc<dyn DatabaseService>,
    pub filters: Arc<dyn FilterService>,
    pub preferences: Arc<dyn PreferenceService>,
    pub gpx: Arc<dyn GpxService>,
    pub logging: Arc<dyn LoggingService>,
}
