use crate::core::routes::Route;
use crate::views::layout::page;
use axum::response::Html;

pub fn render_home() -> Html<String> {
    page(
        "Welcome",
        &format!(
            r#"<div class="home-container">
<h1>Welcome to Our App</h1>
<div class="button-container">
<a class="home-button" href="{create}">Go to Login Page</a>
<a class="home-button" href="{users}">Go to Display User Page</a>
</div>
</div>"#,
            create = Route::CreateUser.path(),
            users = Route::Users.path(),
        ),
    )
}
