//! Static pages and the error page.

use axum::http::StatusCode;

use super::{Nav, escape, layout};

pub fn home() -> String {
    layout(
        "Home",
        Nav::Home,
        r#"<h2>Welcome</h2>
<p>kontak keeps a small address book of names, email addresses and phone numbers.</p>
<p><a class="button" href="/contact">Open contacts</a></p>"#,
    )
}

pub fn about() -> String {
    layout(
        "About",
        Nav::About,
        r#"<h2>About</h2>
<p>A single-operator contact manager. Contacts are stored in a local SQLite database;
names are unique and phone numbers follow the Indonesian mobile format.</p>"#,
    )
}

/// Error page for a non-success status.
pub fn error(status: StatusCode, message: &str) -> String {
    let heading = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        r#"<h2>{code} {heading}</h2>
<p class="error">{message}</p>
<p><a href="/contact">Back to contacts</a></p>"#,
        code = status.as_u16(),
        message = escape(message),
    );
    layout(heading, Nav::None, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_page_shows_status_and_escaped_message() {
        let html = error(StatusCode::NOT_FOUND, "Contact '<x>' not found");
        assert!(html.contains("404 Not Found"));
        assert!(html.contains("Contact &#39;&lt;x&gt;&#39; not found"));
    }
}
