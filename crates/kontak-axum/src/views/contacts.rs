//! Contact pages: listing, detail, add and edit forms.

use std::fmt::Write;

use kontak_core::validation::{Field, ValidationErrors};
use kontak_core::{Contact, ContactInput};

use super::{Nav, escape, layout, path_segment};

/// Contact listing with an optional one-shot feedback message.
pub fn list(contacts: &[Contact], message: Option<&str>) -> String {
    let mut body = String::from("<h2>Contacts</h2>\n");
    if let Some(msg) = message {
        let _ = writeln!(
            body,
            r#"<div class="alert alert-success" role="alert">{}</div>"#,
            escape(msg)
        );
    }
    body.push_str(r#"<p><a class="button" href="/contact/add">Add contact</a></p>"#);
    body.push('\n');

    if contacts.is_empty() {
        body.push_str(r#"<p class="empty">No contacts yet.</p>"#);
        return layout("Contacts", Nav::Contact, &body);
    }

    body.push_str("<table>\n<thead><tr><th>#</th><th>Name</th><th>Email</th><th>Phone</th><th></th></tr></thead>\n<tbody>\n");
    for (idx, contact) in contacts.iter().enumerate() {
        let _ = writeln!(
            body,
            r#"<tr><td>{num}</td><td>{name}</td><td>{email}</td><td>{phone}</td><td><a href="/contact/{seg}">Detail</a></td></tr>"#,
            num = idx + 1,
            name = escape(&contact.name),
            email = escape(contact.email.as_deref().unwrap_or("")),
            phone = escape(&contact.phone),
            seg = path_segment(&contact.name),
        );
    }
    body.push_str("</tbody>\n</table>");

    layout("Contacts", Nav::Contact, &body)
}

/// Detail view for one contact, with edit and delete actions.
pub fn detail(contact: &Contact) -> String {
    let name = escape(&contact.name);
    let body = format!(
        r#"<h2>Contact detail</h2>
<div class="card">
<h3>{name}</h3>
<p class="email">{email}</p>
<p class="phone">{phone}</p>
<a class="button" href="/contact/edit/{seg}">Edit</a>
<form method="post" action="/contact?_method=DELETE" class="inline">
<input type="hidden" name="nama" value="{name}">
<button type="submit" class="danger" onclick="return confirm('Delete this contact?');">Delete</button>
</form>
</div>
<p><a href="/contact">Back to contacts</a></p>"#,
        email = escape(contact.email.as_deref().unwrap_or("-")),
        phone = escape(&contact.phone),
        seg = path_segment(&contact.name),
    );
    layout("Contact detail", Nav::Contact, &body)
}

/// Empty or re-populated add form.
pub fn add_form(input: &ContactInput, errors: &ValidationErrors) -> String {
    let mut body = String::from("<h2>Add contact</h2>\n");
    body.push_str(&error_summary(errors));
    body.push_str(r#"<form method="post" action="/contact">"#);
    body.push('\n');
    body.push_str(&fields(input, errors));
    body.push_str("<button type=\"submit\">Add contact</button>\n</form>");
    layout("Add contact", Nav::Contact, &body)
}

/// Edit form for the contact `id`, carrying the name it had when opened.
pub fn edit_form(id: i64, input: &ContactInput, old_name: &str, errors: &ValidationErrors) -> String {
    let mut body = String::from("<h2>Edit contact</h2>\n");
    body.push_str(&error_summary(errors));
    body.push_str(r#"<form method="post" action="/contact?_method=PUT">"#);
    body.push('\n');
    let _ = writeln!(body, r#"<input type="hidden" name="_id" value="{id}">"#);
    let _ = writeln!(
        body,
        r#"<input type="hidden" name="oldNama" value="{}">"#,
        escape(old_name)
    );
    body.push_str(&fields(input, errors));
    body.push_str("<button type=\"submit\">Save changes</button>\n</form>");
    layout("Edit contact", Nav::Contact, &body)
}

fn error_summary(errors: &ValidationErrors) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let mut out = String::from("<div class=\"alert alert-danger\" role=\"alert\"><ul>\n");
    for err in errors {
        let _ = writeln!(out, "<li>{}</li>", escape(err.message));
    }
    out.push_str("</ul></div>\n");
    out
}

fn fields(input: &ContactInput, errors: &ValidationErrors) -> String {
    let mut out = String::new();
    for (field, label, kind, value) in [
        (Field::Name, "Name", "text", input.name.as_str()),
        (Field::Email, "Email", "email", input.email.as_str()),
        (Field::Phone, "Phone", "text", input.phone.as_str()),
    ] {
        let name = field.form_name();
        let (class, hint) = match errors.for_field(field) {
            Some(err) => (
                " is-invalid",
                format!(r#"<div class="invalid-feedback">{}</div>"#, escape(err.message)),
            ),
            None => ("", String::new()),
        };
        let _ = writeln!(
            out,
            r#"<div class="field"><label for="{name}">{label}</label><input type="{kind}" class="input{class}" id="{name}" name="{name}" value="{value}" required>{hint}</div>"#,
            value = escape(value),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Contact {
        Contact {
            id: 1,
            name: "Alice Liddell".to_string(),
            email: Some("alice@x.com".to_string()),
            phone: "081234567890".to_string(),
        }
    }

    #[test]
    fn list_links_to_encoded_detail_path() {
        let html = list(&[alice()], None);
        assert!(html.contains(r#"href="/contact/Alice%20Liddell""#));
        assert!(!html.contains("alert-success"));
    }

    #[test]
    fn list_shows_message_and_empty_state() {
        let html = list(&[], Some("Contact deleted."));
        assert!(html.contains("Contact deleted."));
        assert!(html.contains("No contacts yet."));
    }

    #[test]
    fn detail_posts_delete_through_method_override() {
        let html = detail(&alice());
        assert!(html.contains(r#"action="/contact?_method=DELETE""#));
        assert!(html.contains(r#"name="nama" value="Alice Liddell""#));
    }

    #[test]
    fn edit_form_carries_id_and_old_name() {
        let html = edit_form(
            7,
            &ContactInput::new("New", "n@x.com", "081234567890"),
            "Old",
            &ValidationErrors::new(),
        );
        assert!(html.contains(r#"name="_id" value="7""#));
        assert!(html.contains(r#"name="oldNama" value="Old""#));
        assert!(html.contains(r#"action="/contact?_method=PUT""#));
    }

    #[test]
    fn add_form_marks_invalid_fields_and_keeps_values() {
        let errors = ValidationErrors::single(Field::Email, "Invalid email address.");
        let html = add_form(&ContactInput::new("Bob", "bob@", "081234567890"), &errors);
        assert!(html.contains(r#"class="input is-invalid" id="email""#));
        assert!(html.contains(r#"value="bob@""#));
        assert!(html.contains("Invalid email address."));
    }
}
