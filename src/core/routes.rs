// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// The three views of the navigation shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    CreateUser,
    Users,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::CreateUser => "/login",
            Route::Users => "/users",
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(Route::Home.path(), get(crate::handlers::home::home_handler))
        .route("/health", get(crate::handlers::health::health_handler))

        // Creation form
        .route(
            Route::CreateUser.path(),
            get(crate::handlers::user_form::form_handler)
                .post(crate::handlers::user_form::submit_handler),
        )

        // Listing, edit dialog and delete
        .route(Route::Users.path(), get(crate::handlers::user_list::list_handler))
        .route("/users/reload", post(crate::handlers::user_list::reload_handler))
        .route("/users/edit/cancel", post(crate::handlers::user_list::cancel_edit_handler))
        .route(
            "/users/{id}/edit",
            get(crate::handlers::user_list::begin_edit_handler)
                .post(crate::handlers::user_list::confirm_edit_handler),
        )
        .route("/users/{id}/delete", post(crate::handlers::user_list::delete_handler))

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}
