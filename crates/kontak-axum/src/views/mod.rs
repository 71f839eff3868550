//! Server-side HTML rendering.
//!
//! Pages are assembled from plain strings. Every value that came from a
//! user or the store goes through [`escape`] before it is written out.

pub mod contacts;
pub mod pages;

use std::fmt::Write;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Percent-encode a contact name for use as a path segment.
pub fn path_segment(name: &str) -> String {
    urlencoding::encode(name).into_owned()
}

/// Navigation entry highlighted in the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Home,
    About,
    Contact,
    None,
}

/// Wrap `body` in the shared page layout.
pub fn layout(title: &str, nav: Nav, body: &str) -> String {
    let mut links = String::new();
    for (entry, href, label) in [
        (Nav::Home, "/", "Home"),
        (Nav::About, "/about", "About"),
        (Nav::Contact, "/contact", "Contact"),
    ] {
        let class = if entry == nav { "nav-link active" } else { "nav-link" };
        let _ = write!(links, r#"<a class="{class}" href="{href}">{label}</a>"#);
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/css/style.css">
</head>
<body>
<nav class="navbar"><span class="brand">kontak</span>{links}</nav>
<main class="container">
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_markup_and_quotes() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn path_segment_encodes_spaces_and_slashes() {
        assert_eq!(path_segment("Budi Santoso"), "Budi%20Santoso");
        assert_eq!(path_segment("a/b"), "a%2Fb");
    }

    #[test]
    fn layout_marks_active_nav_entry() {
        let html = layout("Contacts", Nav::Contact, "<p>hi</p>");
        assert!(html.contains(r#"<a class="nav-link active" href="/contact">"#));
        assert!(html.contains(r#"<a class="nav-link" href="/">"#));
        assert!(html.contains("<p>hi</p>"));
    }
}
