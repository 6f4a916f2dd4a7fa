//! Top-level coordinator for every modal workflow

use crate::dialog::{
    DialogGuard, DialogInput, DialogInstance, DialogKind, DialogOutcome, DialogPayload,
    DialogPresenter, DialogRequest, DialogState, OpenDatabaseInput, PreferencesInput,
    QuickFilterInput, WorkflowOutcome,
};
use crate::error::{FilterError, Result};
use crate::filter::FilterManagementController;
use crate::services::Services;
use crate::types::{FailureDetail, LogRecord, MessageCode, WorkspaceSettings};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Launches the workspace dialogs and wires their outcomes into the services.
///
/// Every workflow follows the same shape: pre-fetch, open, branch on the
/// outcome. The dialog's input is only built once the pre-fetch has
/// completed, and no list is kept between invocations.
pub struct WorkspaceOrchestrator {
    services: Services,
    presenter: Arc<dyn DialogPresenter>,
    settings: WorkspaceSettings,
    state: Mutex<DialogState>,
}

impl WorkspaceOrchestrator {
    pub fn new(
        services: Services,
        presenter: Arc<dyn DialogPresenter>,
        settings: WorkspaceSettings,
    ) -> Self {
        Self {
            services,
            presenter,
            settings,
            state: Mutex::new(DialogState::Closed),
        }
    }

    pub fn dialog_state(&self) -> DialogState {
        *self.state.lock()
    }

    pub fn settings(&self) -> &WorkspaceSettings {
        &self.settings
    }

    // ========================================================================
    // Database and Preferences
    // ========================================================================

    /// Pick a database and load it into the catalog
    pub async fn open_db_dialog(&self) -> Result<WorkflowOutcome> {
        let guard = DialogGuard::acquire(&self.state, DialogKind::OpenDatabase)?;
        self.services.database.read().await?;

        let input = OpenDatabaseInput {
            dbs: self.services.database.db_list(),
            selected: self.services.catalog.db_name(),
        };

        let outcome = self.present(&guard, |_| DialogInput::OpenDatabase(input)).await;
        match outcome {
            DialogOutcome::Confirmed(payload) => {
                let db_name = payload.into_database_name()?;
                info!("Loading database {}", db_name);
                self.services.catalog.read_list(&db_name).await?;
                Ok(guard.finish(WorkflowOutcome::Confirmed))
            }
            other => Ok(guard.finish(Self::settle_silently(other))),
        }
    }

    /// Edit a copy of the preferences and apply it on confirmation
    pub async fn pref_dialog(&self) -> Result<WorkflowOutcome> {
        let guard = DialogGuard::acquire(&self.state, DialogKind::Preferences)?;
        self.services.database.read().await?;

        let input = PreferencesInput {
            data: self.services.preferences.data_copy(),
            dbs: self.services.database.db_list(),
        };

        let outcome = self.present(&guard, |_| DialogInput::Preferences(input)).await;
        match outcome {
            DialogOutcome::Confirmed(payload) => {
                let data = payload.into_preferences()?;
                info!("Applying updated preferences");
                self.services.preferences.update(data).await?;
                Ok(guard.finish(WorkflowOutcome::Confirmed))
            }
            other => Ok(guard.finish(Self::settle_silently(other))),
        }
    }

    // ========================================================================
    // GPX Transfer
    // ========================================================================

    pub async fn import_gpx_dialog(&self) -> Result<WorkflowOutcome> {
        if !self.database_selected() {
            info!("No database open, not offering GPX import");
            return Ok(WorkflowOutcome::Refused);
        }
        let guard = DialogGuard::acquire(&self.state, DialogKind::ImportGpx)?;

        let outcome = self.present(&guard, |_| DialogInput::ImportGpx).await;
        match outcome {
            DialogOutcome::Confirmed(payload) => {
                let request = payload.into_gpx_import()?;
                info!("Importing GPX from {:?}", request.path);
                self.services.gpx.import_gpx(request).await?;
                Ok(guard.finish(WorkflowOutcome::Confirmed))
            }
            DialogOutcome::Dismissed => Ok(guard.finish(WorkflowOutcome::Dismissed)),
            DialogOutcome::Rejected(detail) => {
                self.report_failure(MessageCode::FailureGpxImport, detail);
                Ok(guard.finish(WorkflowOutcome::Rejected))
            }
        }
    }

    pub async fn export_gpx_dialog(&self) -> Result<WorkflowOutcome> {
        if !self.database_selected() {
            info!("No database open, not offering GPX export");
            return Ok(WorkflowOutcome::Refused);
        }
        let guard = DialogGuard::acquire(&self.state, DialogKind::ExportGpx)?;

        let outcome = self.present(&guard, |_| DialogInput::ExportGpx).await;
        match outcome {
            DialogOutcome::Confirmed(payload) => {
                let request = payload.into_gpx_export()?;
                info!(
                    "Exporting {} caches to {}",
                    request.cache_ids.len(),
                    request.file_name
                );
                self.services.gpx.export_gpx(request).await?;
                Ok(guard.finish(WorkflowOutcome::Confirmed))
            }
            DialogOutcome::Dismissed => Ok(guard.finish(WorkflowOutcome::Dismissed)),
            DialogOutcome::Rejected(detail) => {
                self.report_failure(MessageCode::FailureGpxExport, detail);
                Ok(guard.finish(WorkflowOutcome::Rejected))
            }
        }
    }

    // ========================================================================
    // Filters
    // ========================================================================

    /// Tweak the suggested filter and apply the result
    pub async fn basic_filter_dialog(&self) -> Result<WorkflowOutcome> {
        let guard = DialogGuard::acquire(&self.state, DialogKind::QuickFilter)?;
        self.services.filters.read_list().await?;

        let input = QuickFilterInput {
            filter: self.services.filters.resolve_filter(),
        };

        let outcome = self.present(&guard, |_| DialogInput::QuickFilter(input)).await;
        match outcome {
            DialogOutcome::Confirmed(payload) => {
                let filter = payload.into_filter()?;
                info!("Applying quick filter {:?}", filter.name);
                self.services.filters.set_active_filter(filter);
                self.services.catalog.on_filter_changed();
                Ok(guard.finish(WorkflowOutcome::Confirmed))
            }
            other => Ok(guard.finish(Self::settle_silently(other))),
        }
    }

    /// Host the filter management controller.
    ///
    /// Its changes land on the filter service while the dialog is up, so
    /// closing needs no follow-up whichever way it closes.
    pub async fn manage_filter_dialog(&self) -> Result<WorkflowOutcome> {
        let guard = DialogGuard::acquire(&self.state, DialogKind::ManageFilters)?;
        self.services.filters.read_list().await?;

        let filters = Arc::clone(&self.services.filters);
        let outcome = self
            .present(&guard, |instance| {
                DialogInput::ManageFilters(FilterManagementController::new(
                    filters,
                    instance.clone(),
                ))
            })
            .await;

        let outcome = match outcome {
            DialogOutcome::Confirmed(_) => WorkflowOutcome::Confirmed,
            DialogOutcome::Dismissed => WorkflowOutcome::Dismissed,
            DialogOutcome::Rejected(_) => WorkflowOutcome::Rejected,
        };
        Ok(guard.finish(outcome))
    }

    /// Make the entry at `index` of the current list the active filter.
    ///
    /// Synchronous: works on the list the filter service already holds.
    pub fn apply_filter(&self, index: usize) -> Result<()> {
        let list = self.services.filters.filter_list();
        let len = list.len();
        let filter = list
            .into_iter()
            .nth(index)
            .ok_or(FilterError::IndexOutOfRange { index, len })?;

        info!("Applying filter #{} {:?}", index, filter.name);
        self.services.filters.set_active_filter(filter);
        self.services.catalog.on_filter_changed();
        Ok(())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn database_selected(&self) -> bool {
        self.services
            .catalog
            .db_name()
            .is_some_and(|name| !name.is_empty())
    }

    /// Open the dialog and wait for it to settle. `build` runs only now, after
    /// the caller's pre-fetch, and gets the instance so hosted controllers can
    /// close their own dialog.
    async fn present<F>(&self, guard: &DialogGuard<'_>, build: F) -> DialogOutcome<DialogPayload>
    where
        F: FnOnce(&DialogInstance) -> DialogInput,
    {
        let (instance, receiver) = DialogInstance::new(guard.kind());
        let request = DialogRequest {
            id: instance.id(),
            animated: self.settings.animate_dialogs,
            input: build(&instance),
            instance,
        };

        debug!("Opening {} dialog ({})", request.kind(), request.view());
        guard.mark_open();
        self.presenter.open(request);

        receiver.wait().await
    }

    /// Outcome handling for dialogs without a failure channel
    fn settle_silently(outcome: DialogOutcome<DialogPayload>) -> WorkflowOutcome {
        match outcome {
            DialogOutcome::Confirmed(_) => WorkflowOutcome::Confirmed,
            DialogOutcome::Dismissed => WorkflowOutcome::Dismissed,
            DialogOutcome::Rejected(detail) => {
                debug!("Ignoring rejection without failure channel: {:?}", detail);
                WorkflowOutcome::Rejected
            }
        }
    }

    fn report_failure(&self, msg: MessageCode, detail: FailureDetail) {
        warn!("{}: {:?}", msg, detail);
        let record = LogRecord::new(msg)
            .with_response(detail)
            .modal(true);
        self.services.logging.log(record);
    }
}
