//! Row mapping helpers for `SQLite` queries.

use kontak_core::{Contact, RepositoryError};
use sqlx::Row;

/// Shared SELECT column list for contact queries.
pub const CONTACT_SELECT_COLUMNS: &str = "id, nama, email, nohp";

/// Parse a database row into a Contact.
pub fn row_to_contact(row: &sqlx::sqlite::SqliteRow) -> Result<Contact, RepositoryError> {
    Ok(Contact {
        id: row
            .try_get::<i64, _>("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        name: row
            .try_get("nama")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        email: row
            .try_get("email")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        phone: row
            .try_get("nohp")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
    })
}

/// Map a write failure, recognising the unique name index.
pub fn write_error(err: sqlx::Error, name: &str) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepositoryError::AlreadyExists(format!("Contact with name '{name}'"))
        }
        _ => RepositoryError::Storage(err.to_string()),
    }
}
