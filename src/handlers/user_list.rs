use crate::core::error::{ListError, ShellError};
use crate::core::routes::Route;
use crate::core::state::AppState;
use crate::models::user::Field;
use crate::views::user_list::render_user_list;
use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

async fn render(state: &AppState, status: StatusCode) -> Response {
    let mut list = state.session.list().lock().await;
    (status, render_user_list(&mut list)).into_response()
}

fn back_to_list() -> Response {
    Redirect::to(Route::Users.path()).into_response()
}

/// Show the listing, fetching it first if nothing is loaded yet
///
/// GET /users
pub async fn list_handler(State(state): State<Arc<AppState>>) -> Response {
    state.session.ensure_loaded().await;
    render(&state, StatusCode::OK).await
}

/// Fetch the collection again
///
/// POST /users/reload
pub async fn reload_handler(State(state): State<Arc<AppState>>) -> Response {
    if !state.session.load_users().await {
        debug!("Reload requested while a load is running");
    }
    back_to_list()
}

/// Open the edit dialog
///
/// GET /users/{id}/edit
pub async fn begin_edit_handler(
    State(state): State<Arc<AppState>>,
    Path(segment): Path<String>,
) -> Result<Response, ShellError> {
    state.session.ensure_loaded().await;
    {
        let mut list = state.session.list().lock().await;
        let id = list.resolve_id(&segment)?;
        list.begin_edit(&id)?;
    }
    Ok(render(&state, StatusCode::OK).await)
}

/// Apply the posted dialog fields and send the record
///
/// POST /users/{id}/edit
pub async fn confirm_edit_handler(
    State(state): State<Arc<AppState>>,
    Path(segment): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Response, ShellError> {
    {
        let mut list = state.session.list().lock().await;
        let session = list.editing().ok_or(ListError::NotEditing)?;
        if !session.selected.id.matches_segment(&segment) {
            return Err(ListError::NotEditing.into());
        }
        if session.in_flight {
            return Err(ListError::RequestInFlight.into());
        }

        for (name, value) in fields {
            match name.parse::<Field>() {
                Ok(field) => list.edit_field(field, value)?,
                Err(e) => debug!(error = %e, "Ignoring unknown form field"),
            }
        }
    }

    match state.session.confirm_edit().await {
        Ok(()) => {
            let still_editing = state.session.list().lock().await.editing().is_some();
            if still_editing {
                Ok(render(&state, StatusCode::BAD_GATEWAY).await)
            } else {
                Ok(back_to_list())
            }
        }
        Err(ListError::Invalid) => Ok(render(&state, StatusCode::UNPROCESSABLE_ENTITY).await),
        Err(e) => Err(e.into()),
    }
}

/// Close the edit dialog without sending anything
///
/// POST /users/edit/cancel
pub async fn cancel_edit_handler(State(state): State<Arc<AppState>>) -> Response {
    state.session.list().lock().await.cancel_edit();
    back_to_list()
}

/// Delete a record
///
/// POST /users/{id}/delete
pub async fn delete_handler(
    State(state): State<Arc<AppState>>,
    Path(segment): Path<String>,
) -> Result<Response, ShellError> {
    let id = state.session.list().lock().await.resolve_id(&segment)?;
    state.session.delete_user(&id).await?;
    Ok(back_to_list())
}
