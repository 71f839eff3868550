//! Table formatting for contact listings.

use std::fmt::Write;

use kontak_core::Contact;

/// Truncates a string to `max_len` characters, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use kontak_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Render contacts as a fixed-width table with a header row.
pub fn contact_table(contacts: &[Contact]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<5} {:<25} {:<30} Phone", "ID", "Name", "Email");
    let _ = writeln!(out, "{}", "-".repeat(78));
    for contact in contacts {
        let _ = writeln!(
            out,
            "{:<5} {:<25} {:<30} {}",
            contact.id,
            truncate_string(&contact.name, 24),
            truncate_string(contact.email.as_deref().unwrap_or("--"), 29),
            contact.phone,
        );
    }
    out
}
