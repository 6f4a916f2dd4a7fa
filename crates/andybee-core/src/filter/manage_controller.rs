//! Controller hosted by the manage-filters dialog

use crate::dialog::DialogInstance;
use crate::error::Result;
use crate::services::FilterService;
use crate::types::{Filter, FilterList};
use std::sync::Arc;
use tracing::debug;

/// CRUD over the shared filter list from inside the manage-filters dialog.
///
/// Holds no copy of the list. Every mutation goes straight to the filter
/// service and is visible to all other readers as soon as it lands.
pub struct FilterManagementController {
    service: Arc<dyn FilterService>,
    instance: DialogInstance,
    /// Editable name field bound by the view
    filter_name: String,
}

impl FilterManagementController {
    pub fn new(service: Arc<dyn FilterService>, instance: DialogInstance) -> Self {
        Self {
            service,
            instance,
            filter_name: String::new(),
        }
    }

    pub fn filter_name(&self) -> &str {
        &self.filter_name
    }

    pub fn set_filter_name(&mut self, name: impl Into<String>) {
        self.filter_name = name.into();
    }

    /// Live list for rendering
    pub fn filters(&self) -> FilterList {
        self.service.filter_list()
    }

    pub fn active_filter(&self) -> Option<Filter> {
        self.service.active_filter()
    }

    /// Close the hosting dialog without a payload
    pub fn dismiss(&self) {
        self.instance.dismiss();
    }

    /// Create a filter named after the editable field, then clear the field.
    ///
    /// The field is cleared once the service completes, whatever the result.
    /// Failures are the service's to report; the result is only passed through.
    pub async fn create_filter(&mut self) -> Result<()> {
        let result = self.service.create_filter(&self.filter_name).await;
        if let Err(ref e) = result {
            debug!("Filter service reported create failure: {}", e);
        }
        self.filter_name.clear();
        result
    }

    pub async fn delete_filter(&self, index: usize) -> Result<()> {
        self.service.delete_filter(index).await
    }

    pub async fn edit_filter(&self, index: usize) -> Result<()> {
        self.service.edit_filter(index).await
    }
}

impl std::fmt::Debug for FilterManagementController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterManagementController")
            .field("instance", &self.instance)
            .field("filter_name", &self.filter_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::{DialogKind, DialogOutcome};
    use crate::error::{CollaboratorError, Error};
    use crate::services::MockFilterService;

    fn controller(
        service: MockFilterService,
    ) -> (FilterManagementController, crate::dialog::DialogReceiver) {
        let (instance, receiver) = DialogInstance::new(DialogKind::ManageFilters);
        (
            FilterManagementController::new(Arc::new(service), instance),
            receiver,
        )
    }

    #[tokio::test]
    async fn test_create_clears_name_on_success() {
        let mut service = MockFilterService::new();
        service
            .expect_create_filter()
            .withf(|name| name == "Unsolved mysteries")
            .times(1)
            .returning(|_| Ok(()));

        let (mut ctrl, _rx) = controller(service);
        ctrl.set_filter_name("Unsolved mysteries");

        ctrl.create_filter().await.unwrap();
        assert_eq!(ctrl.filter_name(), "");
    }

    #[tokio::test]
    async fn test_create_clears_name_on_failure() {
        let mut service = MockFilterService::new();
        service.expect_create_filter().times(1).returning(|_| {
            Err(Error::Collaborator(CollaboratorError::FilterService(
                "duplicate name".into(),
            )))
        });

        let (mut ctrl, _rx) = controller(service);
        ctrl.set_filter_name("Dup");

        assert!(ctrl.create_filter().await.is_err());
        assert_eq!(ctrl.filter_name(), "");
    }

    #[tokio::test]
    async fn test_delete_delegates_index_once() {
        let mut service = MockFilterService::new();
        service
            .expect_delete_filter()
            .withf(|index| *index == 3)
            .times(1)
            .returning(|_| Ok(()));
        service.expect_edit_filter().times(0);
        service.expect_create_filter().times(0);

        let (ctrl, _rx) = controller(service);
        ctrl.delete_filter(3).await.unwrap();
    }

    #[tokio::test]
    async fn test_edit_delegates_index_once() {
        let mut service = MockFilterService::new();
        service
            .expect_edit_filter()
            .withf(|index| *index == 0)
            .times(1)
            .returning(|_| Ok(()));
        service.expect_delete_filter().times(0);

        let (ctrl, _rx) = controller(service);
        ctrl.edit_filter(0).await.unwrap();
    }

    #[tokio::test]
    async fn test_out_of_range_error_is_passed_through() {
        let mut service = MockFilterService::new();
        service.expect_delete_filter().times(1).returning(|_| {
            Err(Error::Collaborator(CollaboratorError::FilterService(
                "no entry at 42".into(),
            )))
        });

        let (ctrl, _rx) = controller(service);
        assert!(ctrl.delete_filter(42).await.is_err());
    }

    #[tokio::test]
    async fn test_dismiss_settles_dialog_without_mutation() {
        let service = MockFilterService::new();
        let (ctrl, rx) = controller(service);

        ctrl.dismiss();
        assert_eq!(rx.wait().await, DialogOutcome::Dismissed);
    }

    #[test]
    fn test_filters_reads_live_list() {
        let mut service = MockFilterService::new();
        service
            .expect_filter_list()
            .times(2)
            .returning(|| vec![Filter::new("Traditional"), Filter::new("Multi")]);

        let (ctrl, _rx) = controller(service);
        assert_eq!(ctrl.filters().len(), 2);
        assert_eq!(ctrl.filters()[1].name, "Multi");
    }
}
