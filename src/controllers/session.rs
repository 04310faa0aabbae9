use crate::api::client::UserService;
use crate::controllers::user_form::{SubmitOutcome, UserFormController};
use crate::controllers::user_list::UserListController;
use crate::core::error::{FormError, ListError};
use crate::models::user::UserId;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Both controllers plus the service they talk to.
///
/// Each operation locks a controller to start, releases it while the request
/// is in flight, and locks again to apply the completion in one step. Views
/// therefore never observe a half-applied update, and the in-flight guards in
/// the controllers see concurrent duplicates.
pub struct Session<S> {
    service: Arc<S>,
    form: Mutex<UserFormController>,
    list: Mutex<UserListController>,
}

impl<S: UserService> Session<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self {
            service,
            form: Mutex::new(UserFormController::new()),
            list: Mutex::new(UserListController::new()),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn form(&self) -> &Mutex<UserFormController> {
        &self.form
    }

    pub fn list(&self) -> &Mutex<UserListController> {
        &self.list
    }

    /// Submit the creation form
    pub async fn submit_form(&self) -> Result<SubmitOutcome, FormError> {
        let body = self.form.lock().await.begin_submit()?;

        let result = self.service.create_user(&body).await;

        let outcome = self.form.lock().await.complete_submit(result);
        if let SubmitOutcome::Navigate(route) = &outcome {
            debug!(route = route.path(), "Remounting listing after create");
            self.list.lock().await.reset();
        }
        Ok(outcome)
    }

    /// Fetch the collection; returns false if a load was already running
    pub async fn load_users(&self) -> bool {
        if !self.list.lock().await.begin_load() {
            return false;
        }

        let result = self.service.list_users().await;

        self.list.lock().await.complete_load(result);
        true
    }

    /// Load only if the listing has nothing to show yet
    pub async fn ensure_loaded(&self) {
        let needs_load = self.list.lock().await.needs_load();
        if needs_load {
            self.load_users().await;
        }
    }

    /// Send the open edit dialog's record
    pub async fn confirm_edit(&self) -> Result<(), ListError> {
        let (id, body) = self.list.lock().await.begin_confirm()?;

        let result = self.service.replace_user(&id, &body).await;

        self.list.lock().await.complete_confirm(&id, result);
        Ok(())
    }

    pub async fn delete_user(&self, id: &UserId) -> Result<(), ListError> {
        self.list.lock().await.begin_delete(id)?;

        let result = self.service.delete_user(id).await;

        self.list.lock().await.complete_delete(id, result);
        Ok(())
    }
}
