//! AndyBee Core Library
//!
//! Dialog orchestration and filter-state propagation for the AndyBee
//! geocache browser:
//! - Launching the workspace's modal workflows (open database, preferences,
//!   GPX import/export, quick filter, filter management)
//! - Wiring each dialog's outcome into the collaborator services
//! - Managing the named filter list from inside its dialog
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     andybee-core                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  workspace/    - WorkspaceOrchestrator (all workflows)      │
//! │  filter/       - FilterManagementController                 │
//! │  dialog/       - Requests, outcomes, presenter, lifecycle   │
//! │  services/     - Collaborator service traits                │
//! │  types/        - Shared type definitions and settings       │
//! │  error.rs      - Error types                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Data flows one way: a workflow pre-fetches from a service, freezes the
//! dialog input, awaits the outcome and then hands the result back to a
//! service. The core itself owns no application state.

pub mod dialog;
pub mod error;
pub mod filter;
pub mod services;
pub mod types;
pub mod workspace;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;

pub use dialog::{
    ChannelPresenter, DialogInput, DialogInstance, DialogKind, DialogOutcome, DialogPayload,
    DialogPresenter, DialogRequest, DialogState, WorkflowOutcome,
};
pub use filter::FilterManagementController;
pub use services::{
    CatalogService, DatabaseService, FilterService, GpxService, LoggingService,
    PreferenceService, Services,
};
pub use workspace::WorkspaceOrchestrator;
