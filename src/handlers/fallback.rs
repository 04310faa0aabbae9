use crate::core::error::ShellError;
use axum::{
    http::Uri,
    response::{IntoResponse, Response},
};
use tracing::debug;

pub async fn fallback_handler(uri: Uri) -> Response {
    debug!(path = %uri.path(), "No route for path");
    ShellError::NotFound(uri.path().to_string()).into_response()
}
