use crate::core::error::{ClientError, FormError};
use crate::core::routes::Route;
use crate::models::user::{Field, NewUser, User, UserDraft, UserId};
use crate::validation::user::{validate_user, FieldErrors};
use tracing::{debug, error, info};

const USERNAME_PREFIX: &str = "USER-";

/// What the view should do after a completed submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Created; show the listing
    Navigate(Route),
    /// Request failed; stay on the form with this message
    Failed(String),
}

/// Creation form state: the draft record and its field errors
#[derive(Debug, Default)]
pub struct UserFormController {
    draft: UserDraft,
    errors: FieldErrors,
    in_flight: bool,
    failure: Option<String>,
}

impl UserFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Message of the last failed create request, if it has not been replaced since
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Apply one keystroke-level edit.
    ///
    /// Editing `name` re-derives `username` while the name is non-empty; an
    /// emptied name leaves the last derived username in place.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        if field == Field::Username {
            return Err(FormError::ReadOnlyField(field));
        }

        *self.draft.slot_mut(field) = value.into();

        if field == Field::Name && !self.draft.name.is_empty() {
            self.draft.username = format!("{}{}", USERNAME_PREFIX, self.draft.name);
        }

        Ok(())
    }

    /// Run the validation engine and keep its result for display
    pub fn validate(&mut self) -> bool {
        self.errors = validate_user(&self.draft);
        self.errors.is_empty()
    }

    /// Validate and, if the draft is clean, hand out the create request body.
    ///
    /// Marks the form as submitting; a second call before
    /// [`complete_submit`](Self::complete_submit) is rejected.
    pub fn begin_submit(&mut self) -> Result<NewUser, FormError> {
        if self.in_flight {
            return Err(FormError::SubmitInFlight);
        }

        self.failure = None;
        if !self.validate() {
            debug!(errors = self.errors.len(), "Creation form has validation errors");
            return Err(FormError::Invalid);
        }

        self.in_flight = true;
        Ok(NewUser::from_draft(UserId::generate(), &self.draft))
    }

    /// Apply the outcome of the create request started by `begin_submit`
    pub fn complete_submit(&mut self, result: Result<User, ClientError>) -> SubmitOutcome {
        self.in_flight = false;

        match result {
            Ok(created) => {
                info!(user_id = %created.id, name = %created.name, "Form data submitted");
                self.draft = UserDraft::default();
                self.errors.clear();
                SubmitOutcome::Navigate(Route::Users)
            }
            Err(e) => {
                error!(error = %e, "There was a problem submitting the creation form");
                let message = format!("Failed to create user: {}", e);
                self.failure = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> UserFormController {
        let mut form = UserFormController::new();
        for (field, value) in [
            (Field::Name, "Ada"),
            (Field::Email, "ada@example.com"),
            (Field::Phone, "1234567890"),
            (Field::Street, "1 Analytical Way"),
            (Field::City, "London"),
            (Field::Zipcode, "N1 9GU"),
        ] {
            form.edit(field, value).unwrap();
        }
        form
    }

    #[test]
    fn test_name_edit_derives_username() {
        let mut form = UserFormController::new();
        form.edit(Field::Name, "A").unwrap();
        form.edit(Field::Name, "Ad").unwrap();
        form.edit(Field::Name, "Ada").unwrap();
        assert_eq!(form.draft().username, "USER-Ada");
    }

    #[test]
    fn test_clearing_name_keeps_last_username() {
        let mut form = UserFormController::new();
        form.edit(Field::Name, "Ada").unwrap();
        form.edit(Field::Name, "").unwrap();
        assert_eq!(form.draft().name, "");
        assert_eq!(form.draft().username, "USER-Ada");

        form.edit(Field::Name, "Bo").unwrap();
        assert_eq!(form.draft().username, "USER-Bo");
    }

    #[test]
    fn test_empty_draft_has_no_username_prefix() {
        let mut form = UserFormController::new();
        form.edit(Field::Email, "x@y.z").unwrap();
        assert_eq!(form.draft().username, "");
    }

    #[test]
    fn test_username_is_read_only() {
        let mut form = UserFormController::new();
        assert_eq!(
            form.edit(Field::Username, "hacker"),
            Err(FormError::ReadOnlyField(Field::Username))
        );
        assert_eq!(form.draft().username, "");
    }

    #[test]
    fn test_nested_address_edit() {
        let mut form = UserFormController::new();
        form.edit(Field::Suite, "Apt. 5").unwrap();
        assert_eq!(form.draft().suite, "Apt. 5");
        assert_eq!(form.draft().get(Field::Suite), "Apt. 5");
    }

    #[test]
    fn test_invalid_submit_issues_no_request() {
        let mut form = UserFormController::new();
        form.edit(Field::Name, "Al").unwrap();
        assert_eq!(form.begin_submit(), Err(FormError::Invalid));
        assert!(form.errors().contains(Field::Name));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_valid_submit_builds_request_body() {
        let mut form = filled_form();
        let body = form.begin_submit().unwrap();
        assert!(matches!(body.id, UserId::Text(_)));
        assert_eq!(body.username, "USER-Ada");
        assert_eq!(body.address.city, "London");
        assert!(form.is_submitting());
    }

    #[test]
    fn test_second_submit_while_in_flight_is_rejected() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(FormError::SubmitInFlight));
    }

    #[test]
    fn test_successful_submit_resets_form() {
        let mut form = filled_form();
        let body = form.begin_submit().unwrap();
        let created: User = serde_json::from_value(serde_json::to_value(&body).unwrap()).unwrap();

        let outcome = form.complete_submit(Ok(created));
        assert_eq!(outcome, SubmitOutcome::Navigate(Route::Users));
        assert_eq!(form.draft(), &UserDraft::default());
        assert!(form.errors().is_empty());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_failed_submit_keeps_draft() {
        let mut form = filled_form();
        let before = form.draft().clone();
        form.begin_submit().unwrap();

        let outcome = form.complete_submit(Err(ClientError::Status(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        )));
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(form.draft(), &before);
        assert!(form.errors().is_empty());
        assert!(form.failure().is_some());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_invalid_resubmit_clears_previous_failure() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.complete_submit(Err(ClientError::Status(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        )));

        form.edit(Field::Phone, "12345").unwrap();
        assert_eq!(form.begin_submit(), Err(FormError::Invalid));
        assert!(form.failure().is_none());
        assert!(form.errors().contains(Field::Phone));
    }
}
