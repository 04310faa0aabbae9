// Centralized error handling for the user desk

use crate::models::user::Field;
use crate::views::layout::error_page;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures talking to the remote user service
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to create HTTP client: {0}")]
    Build(String),

    #[error("Network request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Remote service returned error status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Rejected creation-form operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Field {0} is read-only")]
    ReadOnlyField(Field),

    #[error("Please fix the highlighted fields")]
    Invalid,

    #[error("A submission is already in progress")]
    SubmitInFlight,
}

/// Rejected listing operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("Users are not loaded")]
    NotReady,

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("No user is being edited")]
    NotEditing,

    #[error("Field {0} cannot be edited here")]
    FieldNotEditable(Field),

    #[error("Please fill in the required fields")]
    Invalid,

    #[error("A request for this user is already in progress")]
    RequestInFlight,
}

/// Errors surfaced by the HTTP shell as whole pages
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Page not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Form(#[from] FormError),

    #[error("{0}")]
    List(#[from] ListError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ShellError {
    fn status(&self) -> StatusCode {
        match self {
            ShellError::NotFound(_) => StatusCode::NOT_FOUND,
            ShellError::Form(FormError::SubmitInFlight) => StatusCode::CONFLICT,
            ShellError::Form(FormError::ReadOnlyField(_)) => StatusCode::BAD_REQUEST,
            ShellError::Form(FormError::Invalid) => StatusCode::UNPROCESSABLE_ENTITY,
            ShellError::List(ListError::RequestInFlight) => StatusCode::CONFLICT,
            ShellError::List(ListError::UserNotFound(_)) => StatusCode::NOT_FOUND,
            ShellError::List(ListError::FieldNotEditable(_)) => StatusCode::BAD_REQUEST,
            ShellError::List(ListError::Invalid) => StatusCode::UNPROCESSABLE_ENTITY,
            ShellError::List(ListError::NotReady | ListError::NotEditing) => StatusCode::CONFLICT,
            ShellError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ShellError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, error_page(status, &self.to_string())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_error_status_codes() {
        assert_eq!(
            ShellError::NotFound("/nope".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ShellError::from(FormError::SubmitInFlight).into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ShellError::from(ListError::UserNotFound("9".to_string()))
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_client_error_messages() {
        let err = ClientError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            err.to_string(),
            "Remote service returned error status: 503 Service Unavailable"
        );
    }
}
