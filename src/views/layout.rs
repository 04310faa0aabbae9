use axum::http::StatusCode;
use axum::response::Html;

/// Escape text for use in HTML element content and quoted attributes
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Wrap a rendered body in the common document shell
pub fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<nav><a href="/">Home</a> | <a href="/login">Create User</a> | <a href="/users">Users</a></nav>
{body}
</body>
</html>"#,
        title = escape(title),
        body = body,
    ))
}

pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let title = status.canonical_reason().unwrap_or("Error");
    page(
        title,
        &format!(
            "<h1>{}</h1>\n<p class=\"error\">{}</p>",
            escape(title),
            escape(message)
        ),
    )
}
