//! Per-dialog lifecycle tracking

use super::request::DialogKind;
use crate::error::{DialogError, Result};
use parking_lot::Mutex;
use tracing::debug;

/// Where the orchestrator currently is in a dialog's lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Prefetching(DialogKind),
    Open(DialogKind),
}

/// Terminal state a workflow reached before returning to `Closed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// Precondition failed; the dialog never opened
    Refused,
    Confirmed,
    Dismissed,
    Rejected,
}

/// Marks a workflow as in flight. Dropping it returns the state to `Closed`,
/// including when the workflow bails out early or its future is dropped.
pub(crate) struct DialogGuard<'a> {
    state: &'a Mutex<DialogState>,
    kind: DialogKind,
}

impl<'a> DialogGuard<'a> {
    /// Enter `Prefetching`, failing if another dialog is still in flight
    pub(crate) fn acquire(state: &'a Mutex<DialogState>, kind: DialogKind) -> Result<Self> {
        let mut current = state.lock();
        if let DialogState::Prefetching(active) | DialogState::Open(active) = *current {
            return Err(DialogError::Busy(active.to_string()).into());
        }
        *current = DialogState::Prefetching(kind);
        debug!("{} dialog: closed -> prefetching", kind);

        Ok(Self { state, kind })
    }

    pub(crate) fn kind(&self) -> DialogKind {
        self.kind
    }

    pub(crate) fn mark_open(&self) {
        *self.state.lock() = DialogState::Open(self.kind);
        debug!("{} dialog: prefetching -> open", self.kind);
    }

    pub(crate) fn finish(self, outcome: WorkflowOutcome) -> WorkflowOutcome {
        debug!("{} dialog: -> {:?} -> closed", self.kind, outcome);
        outcome
    }
}

impl Drop for DialogGuard<'_> {
    fn drop(&mut self) {
        *self.state.lock() = DialogState::Closed;
    }
}
