//! Core type definitions for AndyBee
//!
//! Data exchanged between the orchestrator, its dialogs and the collaborator
//! services: filters, preference payloads, GPX transfer requests, failure
//! records and workspace settings.

mod filter_types;
mod gpx_types;
mod log_types;
mod preference_types;
mod settings_types;

pub use filter_types::*;
pub use gpx_types::*;
pub use log_types::*;
pub use preference_types::*;
pub use settings_types::*;
