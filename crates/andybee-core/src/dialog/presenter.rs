//! Presenter seam between the orchestrator and the UI host

use super::request::DialogRequest;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Shows modal dialogs.
///
/// `open` must return promptly; the dialog stays up until the presenter (or
/// the view it hosts) settles `request.instance`.
#[cfg_attr(test, mockall::automock)]
pub trait DialogPresenter: Send + Sync {
    fn open(&self, request: DialogRequest);
}

/// Presenter that forwards every request to a UI event loop over a channel.
///
/// If the receiving side has gone away the request is dropped, which settles
/// the dialog as dismissed.
#[derive(Debug, Clone)]
pub struct ChannelPresenter {
    tx: mpsc::UnboundedSender<DialogRequest>,
}

impl ChannelPresenter {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<DialogRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl DialogPresenter for ChannelPresenter {
    fn open(&self, request: DialogRequest) {
        let kind = request.kind();
        match self.tx.send(request) {
            Ok(()) => debug!("Queued {} dialog for the UI", kind),
            Err(_) => warn!("UI receiver closed, dropping {} dialog", kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::instance::DialogInstance;
    use crate::dialog::outcome::DialogOutcome;
    use crate::dialog::request::{DialogInput, DialogKind};
    use uuid::Uuid;

    fn request(kind: DialogKind) -> (DialogRequest, crate::dialog::instance::DialogReceiver) {
        let (instance, receiver) = DialogInstance::new(kind);
        let request = DialogRequest {
            id: instance.id(),
            animated: false,
            input: DialogInput::ImportGpx,
            instance,
        };
        (request, receiver)
    }

    #[tokio::test]
    async fn test_channel_presenter_forwards_request() {
        let (presenter, mut rx) = ChannelPresenter::new();
        let (req, receiver) = request(DialogKind::ImportGpx);
        let id: Uuid = req.id;

        presenter.open(req);

        let received = rx.recv().await.unwrap();
        assert_eq!(received.id, id);
        assert_eq!(received.view(), "gpx/import");

        received.instance.dismiss();
        assert_eq!(receiver.wait().await, DialogOutcome::Dismissed);
    }

    #[tokio::test]
    async fn test_closed_receiver_dismisses() {
        let (presenter, rx) = ChannelPresenter::new();
        drop(rx);

        let (req, receiver) = request(DialogKind::ImportGpx);
        presenter.open(req);

        assert_eq!(receiver.wait().await, DialogOutcome::Dismissed);
    }
}
