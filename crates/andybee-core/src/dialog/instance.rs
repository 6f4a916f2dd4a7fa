//! Handle used by a dialog to report how it closed

use super::outcome::DialogOutcome;
use super::request::{DialogKind, DialogPayload};
use crate::types::FailureDetail;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::debug;
use uuid::Uuid;

type OutcomeSender = oneshot::Sender<DialogOutcome<DialogPayload>>;

/// Close handle for one open dialog.
///
/// Clones share the same underlying channel; the first call to `close`,
/// `dismiss` or `reject` settles the dialog and every later call is ignored.
/// Dropping all clones without settling counts as a dismissal.
#[derive(Clone)]
pub struct DialogInstance {
    id: Uuid,
    kind: DialogKind,
    sender: Arc<Mutex<Option<OutcomeSender>>>,
}

impl DialogInstance {
    pub(crate) fn new(kind: DialogKind) -> (Self, DialogReceiver) {
        let (tx, rx) = oneshot::channel();
        let instance = Self {
            id: Uuid::new_v4(),
            kind,
            sender: Arc::new(Mutex::new(Some(tx))),
        };
        (instance, DialogReceiver { rx })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> DialogKind {
        self.kind
    }

    /// Confirm with a payload
    pub fn close(&self, payload: DialogPayload) -> bool {
        self.settle(DialogOutcome::Confirmed(payload))
    }

    /// User cancellation
    pub fn dismiss(&self) -> bool {
        self.settle(DialogOutcome::Dismissed)
    }

    /// Workflow failure
    pub fn reject(&self, detail: FailureDetail) -> bool {
        self.settle(DialogOutcome::Rejected(detail))
    }

    pub fn is_settled(&self) -> bool {
        self.sender.lock().is_none()
    }

    fn settle(&self, outcome: DialogOutcome<DialogPayload>) -> bool {
        let Some(tx) = self.sender.lock().take() else {
            debug!("Dialog {} ({}) already settled", self.id, self.kind);
            return false;
        };
        tx.send(outcome).is_ok()
    }
}

impl std::fmt::Debug for DialogInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogInstance")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("settled", &self.is_settled())
            .finish()
    }
}

/// Awaiting side of a `DialogInstance`
pub(crate) struct DialogReceiver {
    rx: oneshot::Receiver<DialogOutcome<DialogPayload>>,
}

impl DialogReceiver {
    pub(crate) async fn wait(self) -> DialogOutcome<DialogPayload> {
        self.rx.await.unwrap_or(DialogOutcome::Dismissed)
    }
}
