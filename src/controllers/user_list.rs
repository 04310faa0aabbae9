use crate::core::error::{ClientError, ListError};
use crate::models::user::{Address, EditDraft, Field, User, UserId};
use crate::validation::user::{validate_required, FieldErrors};
use std::collections::HashSet;
use tracing::{error, info, warn};

/// Lifecycle of the fetched collection
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Ready(Vec<User>),
    LoadError(String),
}

/// The edit dialog: the record being edited and its working copy
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub selected: User,
    pub draft: EditDraft,
    pub errors: FieldErrors,
    pub in_flight: bool,
    pub failure: Option<String>,
}

/// Merge an edit draft into the selected record.
///
/// The four flat address fields are replaced. Other address members (such as
/// `geo`), id, company and website are carried through untouched.
pub fn merge_edit(selected: &User, draft: &EditDraft) -> User {
    User {
        name: draft.name.clone(),
        email: draft.email.clone(),
        username: draft.username.clone(),
        phone: draft.phone.clone(),
        address: Address {
            street: draft.street.clone(),
            suite: draft.suite.clone(),
            city: draft.city.clone(),
            zipcode: draft.zipcode.clone(),
            extra: selected.address.extra.clone(),
        },
        ..selected.clone()
    }
}

/// Replace the record with `id`; returns whether one was found
pub fn replace_by_id(users: &mut [User], id: &UserId, record: User) -> bool {
    match users.iter_mut().find(|u| &u.id == id) {
        Some(slot) => {
            *slot = record;
            true
        }
        None => false,
    }
}

/// Drop the record with `id`; returns whether one was removed
pub fn remove_by_id(users: &mut Vec<User>, id: &UserId) -> bool {
    let before = users.len();
    users.retain(|u| &u.id != id);
    users.len() != before
}

/// Listing state: the collection, the optional edit dialog and a transient notice.
///
/// The collection only changes in the `complete_*` methods, after the server
/// has confirmed the mutation.
#[derive(Debug, Default)]
pub struct UserListController {
    state: LoadState,
    editing: Option<EditSession>,
    pending_deletes: HashSet<UserId>,
    notice: Option<String>,
}

impl UserListController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn users(&self) -> Option<&[User]> {
        match &self.state {
            LoadState::Ready(users) => Some(users.as_slice()),
            _ => None,
        }
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn is_deleting(&self, id: &UserId) -> bool {
        self.pending_deletes.contains(id)
    }

    /// Whether the view should fetch on entry
    pub fn needs_load(&self) -> bool {
        matches!(self.state, LoadState::NotLoaded | LoadState::LoadError(_))
    }

    /// Show the notice once, then forget it
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Forget everything, as when the view is left and entered again
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Enter `Loading`; returns false if a load is already running
    pub fn begin_load(&mut self) -> bool {
        if self.state == LoadState::Loading {
            return false;
        }
        self.state = LoadState::Loading;
        self.editing = None;
        true
    }

    pub fn complete_load(&mut self, result: Result<Vec<User>, ClientError>) {
        self.state = match result {
            Ok(users) => {
                info!(users = users.len(), "Users loaded");
                LoadState::Ready(users)
            }
            Err(e) => {
                error!(error = %e, "Error fetching users");
                LoadState::LoadError("Failed to fetch user data".to_string())
            }
        };
    }

    /// Find the record whose id renders as `segment` and return its own id
    pub fn resolve_id(&self, segment: &str) -> Result<UserId, ListError> {
        let users = self.users().ok_or(ListError::NotReady)?;
        users
            .iter()
            .find(|u| u.id.matches_segment(segment))
            .map(|u| u.id.clone())
            .ok_or_else(|| ListError::UserNotFound(segment.to_string()))
    }

    /// Open the edit dialog on the record with `id`
    pub fn begin_edit(&mut self, id: &UserId) -> Result<(), ListError> {
        let users = self.users().ok_or(ListError::NotReady)?;
        let selected = users
            .iter()
            .find(|u| &u.id == id)
            .cloned()
            .ok_or_else(|| ListError::UserNotFound(id.to_string()))?;

        if self.editing.as_ref().is_some_and(|s| s.in_flight) {
            return Err(ListError::RequestInFlight);
        }

        self.editing = Some(EditSession {
            draft: EditDraft::from_user(&selected),
            selected,
            errors: FieldErrors::new(),
            in_flight: false,
            failure: None,
        });
        Ok(())
    }

    pub fn edit_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), ListError> {
        let session = self.editing.as_mut().ok_or(ListError::NotEditing)?;
        let slot = session
            .draft
            .slot_mut(field)
            .ok_or(ListError::FieldNotEditable(field))?;
        *slot = value.into();
        Ok(())
    }

    /// Check required fields and produce the record to send.
    ///
    /// Nothing in the collection changes here.
    pub fn begin_confirm(&mut self) -> Result<(UserId, User), ListError> {
        let session = self.editing.as_mut().ok_or(ListError::NotEditing)?;
        if session.in_flight {
            return Err(ListError::RequestInFlight);
        }

        session.errors = validate_required(&session.draft);
        if !session.errors.is_empty() {
            return Err(ListError::Invalid);
        }

        session.in_flight = true;
        session.failure = None;
        let id = session.selected.id.clone();
        Ok((id, merge_edit(&session.selected, &session.draft)))
    }

    /// Apply the replace response for `id`
    pub fn complete_confirm(&mut self, id: &UserId, result: Result<User, ClientError>) {
        match result {
            Ok(updated) => {
                if let LoadState::Ready(users) = &mut self.state {
                    if !replace_by_id(users, id, updated) {
                        warn!(user_id = %id, "Updated user no longer in the collection");
                    }
                }
                if self.editing.as_ref().is_some_and(|s| &s.selected.id == id) {
                    self.editing = None;
                }
                info!(user_id = %id, "User updated");
            }
            Err(e) => {
                error!(user_id = %id, error = %e, "Failed to update user");
                let message = format!("Failed to update user: {}", e);
                match self.editing.as_mut().filter(|s| &s.selected.id == id) {
                    Some(session) => {
                        session.in_flight = false;
                        session.failure = Some(message);
                    }
                    None => self.notice = Some(message),
                }
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Mark `id` as being deleted; a second delete of the same record is rejected
    pub fn begin_delete(&mut self, id: &UserId) -> Result<(), ListError> {
        let users = self.users().ok_or(ListError::NotReady)?;
        if !users.iter().any(|u| &u.id == id) {
            return Err(ListError::UserNotFound(id.to_string()));
        }
        if !self.pending_deletes.insert(id.clone()) {
            return Err(ListError::RequestInFlight);
        }
        Ok(())
    }

    pub fn complete_delete(&mut self, id: &UserId, result: Result<(), ClientError>) {
        self.pending_deletes.remove(id);

        match result {
            Ok(()) => {
                if let LoadState::Ready(users) = &mut self.state {
                    remove_by_id(users, id);
                }
                if self.editing.as_ref().is_some_and(|s| &s.selected.id == id) {
                    self.editing = None;
                }
                info!(user_id = %id, "User deleted");
            }
            Err(e) => {
                error!(user_id = %id, error = %e, "Failed to delete user");
                self.notice = Some(format!("Failed to delete user: {}", e));
            }
        }
    }
}
