use crate::controllers::user_form::UserFormController;
use crate::models::user::Field;
use crate::views::layout::{escape, page};
use axum::response::Html;
use std::fmt::Write;

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        _ => "text",
    }
}

/// Render the creation form with the current draft, field errors and any failure message
pub fn render_user_form(form: &UserFormController) -> Html<String> {
    let mut body = String::from("<h1>Create User</h1>\n");

    if let Some(failure) = form.failure() {
        let _ = writeln!(body, r#"<p class="error" role="alert">{}</p>"#, escape(failure));
    }

    body.push_str("<form method=\"post\" action=\"/login\">\n");

    for field in Field::ALL {
        let value = escape(form.draft().get(field));
        let readonly = if field == Field::Username { " readonly" } else { "" };

        let _ = writeln!(
            body,
            r#"<div><label for="{name}">{label}:</label><input type="{kind}" id="{name}" name="{name}" value="{value}"{readonly}></div>"#,
            name = field.as_str(),
            label = field.label(),
            kind = input_type(field),
            value = value,
            readonly = readonly,
        );

        if let Some(message) = form.errors().get(field) {
            let _ = writeln!(body, r#"<p class="error">{}</p>"#, escape(message));
        }
    }

    let disabled = if form.is_submitting() { " disabled" } else { "" };
    let _ = writeln!(body, r#"<button type="submit"{}>Submit</button>"#, disabled);
    body.push_str("</form>");

    page("Create User", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_is_readonly_and_derived() {
        let mut form = UserFormController::new();
        form.edit(Field::Name, "Ada").unwrap();
        let Html(html) = render_user_form(&form);
        assert!(html.contains(r#"name="username" value="USER-Ada" readonly>"#));
        assert!(html.contains(r#"name="address.city" value="""#));
    }

    #[test]
    fn test_errors_render_next_to_fields() {
        let mut form = UserFormController::new();
        form.edit(Field::Name, "<b").unwrap();
        form.validate();
        let Html(html) = render_user_form(&form);
        assert!(html.contains("Name must be at least 3 characters long"));
        assert!(html.contains("Street is required"));
        assert!(html.contains("value=\"&lt;b\""));
    }

    #[test]
    fn test_submit_button_disabled_while_submitting() {
        let mut form = UserFormController::new();
        let Html(html) = render_user_form(&form);
        assert!(html.contains(r#"<button type="submit">Submit</button>"#));

        for (field, value) in [
            (Field::Name, "Ada"),
            (Field::Email, "ada@example.com"),
            (Field::Phone, "1234567890"),
            (Field::Street, "Main St"),
            (Field::City, "London"),
            (Field::Zipcode, "12345"),
        ] {
            form.edit(field, value).unwrap();
        }
        form.begin_submit().unwrap();

        let Html(html) = render_user_form(&form);
        assert!(html.contains(r#"<button type="submit" disabled>Submit</button>"#));
    }
}
