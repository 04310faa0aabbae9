use crate::views::home::render_home;
use axum::response::Html;

/// Landing page
///
/// GET /
pub async fn home_handler() -> Html<String> {
    render_home()
}
