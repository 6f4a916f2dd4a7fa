//! Three-channel dialog outcome

use crate::types::FailureDetail;

/// How a dialog closed.
///
/// `Dismissed` is a user cancellation and always silent. `Rejected` is a
/// failure reported by the dialog's own workflow and carries its raw detail.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome<T> {
    Confirmed(T),
    Dismissed,
    Rejected(FailureDetail),
}
