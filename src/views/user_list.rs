use crate::controllers::user_list::{EditSession, LoadState, UserListController};
use crate::models::user::{EditDraft, User, UserId};
use crate::views::layout::{escape, page};
use axum::response::Html;
use std::fmt::Write;

/// Render the listing view. Consumes the controller's transient notice.
pub fn render_user_list(list: &mut UserListController) -> Html<String> {
    let notice = list.take_notice();

    let users = match list.state() {
        LoadState::NotLoaded | LoadState::Loading => {
            return page("User Details", "<div>Loading...</div>");
        }
        LoadState::LoadError(message) => {
            let body = format!(
                "<div class=\"error\">{}</div>\n<form method=\"post\" action=\"/users/reload\"><button type=\"submit\">Retry</button></form>",
                escape(message)
            );
            return page("User Details", &body);
        }
        LoadState::Ready(users) => users,
    };

    let mut body = String::from("<h1>User Details</h1>\n");

    if let Some(notice) = notice {
        let _ = writeln!(body, r#"<p class="error" role="alert">{}</p>"#, escape(&notice));
    }

    body.push_str(
        "<table border=\"1\" cellpadding=\"10\">\n<thead><tr><th>Name</th><th>Email</th><th>Username</th><th>Phone</th><th>Address</th><th>Company Name</th><th>Website</th><th>Edit</th><th>Delete</th></tr></thead>\n<tbody>\n",
    );
    for user in users {
        render_row(&mut body, user, list.is_deleting(&user.id));
    }
    body.push_str("</tbody>\n</table>\n");

    if let Some(session) = list.editing() {
        render_edit_dialog(&mut body, session);
    }

    page("User Details", &body)
}

/// Path segment for `id`, percent-encoded then HTML-escaped
fn id_segment(id: &UserId) -> String {
    escape(&urlencoding::encode(&id.to_string()))
}

fn render_row(body: &mut String, user: &User, deleting: bool) {
    let id = id_segment(&user.id);
    let disabled = if deleting { " disabled" } else { "" };

    let _ = writeln!(
        body,
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
<td><a href=\"/users/{id}/edit\">Edit</a></td>\
<td><form method=\"post\" action=\"/users/{id}/delete\"><button type=\"submit\" class=\"danger\"{disabled}>Delete</button></form></td></tr>",
        escape(&user.name),
        escape(&user.email),
        escape(&user.username),
        escape(&user.phone),
        escape(&user.address.summary()),
        escape(user.company_display()),
        escape(user.website.as_deref().unwrap_or("")),
        id = id,
        disabled = disabled,
    );
}

fn render_edit_dialog(body: &mut String, session: &EditSession) {
    let id = id_segment(&session.selected.id);

    let _ = writeln!(
        body,
        "<dialog open>\n<h2>Edit User</h2>\n<form method=\"post\" action=\"/users/{}/edit\">",
        id
    );

    if let Some(failure) = &session.failure {
        let _ = writeln!(body, r#"<p class="error" role="alert">{}</p>"#, escape(failure));
    }

    for field in EditDraft::FIELDS {
        let value = session.draft.get(field).unwrap_or("");
        let _ = writeln!(
            body,
            r#"<div><label for="{name}">{label}</label><input type="text" id="{name}" name="{name}" value="{value}"></div>"#,
            name = field.as_str(),
            label = field.label(),
            value = escape(value),
        );
        if let Some(message) = session.errors.get(field) {
            let _ = writeln!(body, r#"<p class="error">{}</p>"#, escape(message));
        }
    }

    let disabled = if session.in_flight { " disabled" } else { "" };
    let _ = writeln!(body, r#"<button type="submit"{}>OK</button>"#, disabled);
    body.push_str("</form>\n<form method=\"post\" action=\"/users/edit/cancel\"><button type=\"submit\">Cancel</button></form>\n</dialog>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::sample_user;
    use crate::core::error::ClientError;

    fn ready_list() -> UserListController {
        let mut list = UserListController::new();
        list.begin_load();
        list.complete_load(Ok(vec![
            sample_user(1, "Leanne <Graham>", "Gwenborough"),
            sample_user(2, "Ervin Howell", "Wisokyburgh"),
        ]));
        list
    }

    #[test]
    fn test_loading_and_error_views() {
        let mut list = UserListController::new();
        let Html(html) = render_user_list(&mut list);
        assert!(html.contains("Loading..."));

        list.begin_load();
        list.complete_load(Err(ClientError::Decode("bad".into())));
        let Html(html) = render_user_list(&mut list);
        assert!(html.contains("Failed to fetch user data"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_table_rows() {
        let mut list = ready_list();
        let Html(html) = render_user_list(&mut list);
        assert!(html.contains("Leanne &lt;Graham&gt;"));
        assert!(html.contains("Main St, Apt. 1, Wisokyburgh 12345"));
        assert!(html.contains("<td>ACME</td>"));
        assert!(html.contains(r#"href="/users/2/edit""#));
        assert!(!html.contains("<dialog"));
    }

    #[test]
    fn test_failed_edit_is_reported_once_in_the_dialog() {
        let mut list = ready_list();
        list.begin_edit(&UserId::from(2)).unwrap();
        let (id, _) = list.begin_confirm().unwrap();
        list.complete_confirm(&id, Err(ClientError::Decode("boom".into())));

        let Html(html) = render_user_list(&mut list);
        assert!(html.contains("<dialog open>"));
        assert!(html.contains(r#"action="/users/2/edit""#));
        assert!(html.contains(r#"name="address.city" value="Wisokyburgh""#));
        assert_eq!(html.matches("Failed to update user").count(), 1);
        assert!(html.contains(r#"<button type="submit">OK</button>"#));

        let Html(again) = render_user_list(&mut list);
        assert_eq!(again.matches("Failed to update user").count(), 1);
    }

    #[test]
    fn test_controls_disabled_while_in_flight() {
        let mut list = ready_list();
        list.begin_delete(&UserId::from(1)).unwrap();
        list.begin_edit(&UserId::from(2)).unwrap();
        list.begin_confirm().unwrap();

        let Html(html) = render_user_list(&mut list);
        assert!(html.contains(
            r#"action="/users/1/delete"><button type="submit" class="danger" disabled>Delete</button>"#
        ));
        assert!(html.contains(
            r#"action="/users/2/delete"><button type="submit" class="danger">Delete</button>"#
        ));
        assert!(html.contains(r#"<button type="submit" disabled>OK</button>"#));
    }

    #[test]
    fn test_text_ids_are_percent_encoded_in_links() {
        let mut user = sample_user(5, "Slashy", "Somewhere");
        user.id = UserId::Text("a/b?c#d".to_string());
        let mut list = UserListController::new();
        list.begin_load();
        list.complete_load(Ok(vec![user]));
        list.begin_edit(&UserId::Text("a/b?c#d".to_string())).unwrap();

        let Html(html) = render_user_list(&mut list);
        assert!(html.contains(r#"href="/users/a%2Fb%3Fc%23d/edit""#));
        assert!(html.contains(r#"action="/users/a%2Fb%3Fc%23d/delete""#));
        assert!(html.contains(r#"action="/users/a%2Fb%3Fc%23d/edit""#));
    }
}
