//! Modal dialog plumbing
//!
//! A workflow builds a `DialogRequest` with pre-resolved input, hands it to a
//! `DialogPresenter` and awaits the `DialogOutcome` reported through the
//! request's `DialogInstance`.

mod instance;
mod outcome;
mod presenter;
mod request;
mod state;

pub use instance::DialogInstance;
pub use outcome::DialogOutcome;
pub use presenter::{ChannelPresenter, DialogPresenter};
pub use request::{
    DialogInput, DialogKind, DialogPayload, DialogRequest, OpenDatabaseInput, PreferencesInput,
    QuickFilterInput,
};
pub use state::{DialogState, WorkflowOutcome};

pub(crate) use state::DialogGuard;

#[cfg(test)]
pub(crate) use instance::DialogReceiver;
#[cfg(test)]
pub use presenter::MockDialogPresenter;
