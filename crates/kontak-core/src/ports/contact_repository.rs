//! Contact repository trait definition.
//!
//! This port defines the interface for contact persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Contact, NewContact};

/// Repository for contact persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - CRUD-only: validation and feedback belong in `ContactService`
/// - Lookups that may miss return `Option`, not `NotFound`
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// List all contacts in insertion order.
    async fn list(&self) -> Result<Vec<Contact>, RepositoryError>;

    /// Exact-match lookup by name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Contact>, RepositoryError>;

    /// Lookup by store-assigned ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>, RepositoryError>;

    /// Insert a new contact and return it with its assigned ID.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` if the name is taken.
    async fn insert(&self, contact: &NewContact) -> Result<Contact, RepositoryError>;

    /// Replace name, email and phone of the contact with the given ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no such ID exists and
    /// `Err(RepositoryError::AlreadyExists)` if the new name belongs to
    /// another contact.
    async fn update_by_id(&self, id: i64, fields: &NewContact) -> Result<(), RepositoryError>;

    /// Delete at most one contact with the given name.
    ///
    /// Returns whether a contact was removed. A missing name is not an error.
    async fn delete_by_name(&self, name: &str) -> Result<bool, RepositoryError>;
}
