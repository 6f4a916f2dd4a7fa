//! Workspace-level workflow orchestration

mod orchestrator;

pub use orchestrator::WorkspaceOrchestrator;
