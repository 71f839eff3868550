//! `SQLite` implementation of the `ContactRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use kontak_core::{Contact, ContactRepository, NewContact, RepositoryError};

use super::row_mappers::{CONTACT_SELECT_COLUMNS, row_to_contact, write_error};

/// `SQLite` implementation of the `ContactRepository` trait.
pub struct SqliteContactRepository {
    pool: SqlitePool,
}

impl SqliteContactRepository {
    /// Create a new `SQLite` contact repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool (for testing only).
    #[cfg(test)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn list(&self) -> Result<Vec<Contact>, RepositoryError> {
        let query = format!("SELECT {CONTACT_SELECT_COLUMNS} FROM contacts ORDER BY id");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_contact).collect()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Contact>, RepositoryError> {
        let query = format!("SELECT {CONTACT_SELECT_COLUMNS} FROM contacts WHERE nama = ?");

        let row = sqlx::query(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        row.as_ref().map(row_to_contact).transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>, RepositoryError> {
        let query = format!("SELECT {CONTACT_SELECT_COLUMNS} FROM contacts WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        row.as_ref().map(row_to_contact).transpose()
    }

    async fn insert(&self, contact: &NewContact) -> Result<Contact, RepositoryError> {
        let result = sqlx::query("INSERT INTO contacts (nama, email, nohp) VALUES (?, ?, ?)")
            .bind(&contact.name)
            .bind(&contact.email)
            .bind(&contact.phone)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(e, &contact.name))?;

        Ok(contact.clone().with_id(result.last_insert_rowid()))
    }

    async fn update_by_id(&self, id: i64, fields: &NewContact) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE contacts SET nama = ?, email = ?, nohp = ? WHERE id = ?")
            .bind(&fields.name)
            .bind(&fields.email)
            .bind(&fields.phone)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(e, &fields.name))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Contact with ID {id}")));
        }

        Ok(())
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool, RepositoryError> {
        // The unique index guarantees at most one match
        let result = sqlx::query("DELETE FROM contacts WHERE nama = ?")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
