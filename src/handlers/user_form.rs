use crate::controllers::user_form::SubmitOutcome;
use crate::core::error::{FormError, ShellError};
use crate::core::state::AppState;
use crate::models::user::Field;
use crate::views::user_form::render_user_form;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Show the creation form
///
/// GET /login
pub async fn form_handler(State(state): State<Arc<AppState>>) -> Response {
    let form = state.session.form().lock().await;
    render_user_form(&form).into_response()
}

/// Apply the posted fields to the draft and submit it
///
/// POST /login
pub async fn submit_handler(
    State(state): State<Arc<AppState>>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Response, ShellError> {
    {
        let mut form = state.session.form().lock().await;
        if form.is_submitting() {
            return Err(FormError::SubmitInFlight.into());
        }

        for (name, value) in fields {
            match name.parse::<Field>() {
                // echoed back by the readonly input, derived from name instead
                Ok(Field::Username) => {}
                Ok(field) => form.edit(field, value)?,
                Err(e) => debug!(error = %e, "Ignoring unknown form field"),
            }
        }
    }

    match state.session.submit_form().await {
        Ok(SubmitOutcome::Navigate(route)) => {
            info!(route = route.path(), "User created, navigating");
            Ok(Redirect::to(route.path()).into_response())
        }
        Ok(SubmitOutcome::Failed(_)) => {
            let form = state.session.form().lock().await;
            Ok((StatusCode::BAD_GATEWAY, render_user_form(&form)).into_response())
        }
        Err(FormError::Invalid) => {
            let form = state.session.form().lock().await;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, render_user_form(&form)).into_response())
        }
        Err(e) => Err(e.into()),
    }
}
