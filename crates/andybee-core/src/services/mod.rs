//! Collaborator service interfaces
//!
//! The orchestration layer owns no application state of its own. Catalog,
//! database enumeration, filters, preferences, GPX transfer and the logging
//! sink are consumed through the traits defined here.

pub mod traits;

pub use traits::{
    CatalogService, DatabaseService, FilterService, GpxService, LoggingService,
    PreferenceService, Services,
};

#[cfg(test)]
pub use traits::{
    MockCatalogService, MockDatabaseService, MockFilterService, MockGpxService,
    MockLoggingService, MockPreferenceService,
};
