//! Contact service - validation and persistence workflow.
//!
//! Every write is a short sequence against the repository: gather facts,
//! run the rule table, then commit. Nothing intermediate is persisted.

use std::sync::Arc;

use crate::domain::{Committed, Contact, ContactInput, ContactUpdate, Feedback};
use crate::ports::{ContactRepository, CoreError, RepositoryError};
use crate::validation::{Field, NAME_TAKEN, RuleContext, ValidationErrors, validate};

/// Service for contact operations.
pub struct ContactService {
    repo: Arc<dyn ContactRepository>,
}

impl ContactService {
    /// Create a new contact service with the given repository.
    pub fn new(repo: Arc<dyn ContactRepository>) -> Self {
        Self { repo }
    }

    /// List all contacts.
    pub async fn list(&self) -> Result<Vec<Contact>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }

    /// Get a contact by name, or `None` if absent.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Contact>, CoreError> {
        self.repo.find_by_name(name).await.map_err(CoreError::from)
    }

    /// Get a contact by ID, or `None` if absent.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Contact>, CoreError> {
        self.repo.find_by_id(id).await.map_err(CoreError::from)
    }

    /// Find a contact by name. Returns `CoreError::NotFound` if absent.
    pub async fn find_by_name(&self, name: &str) -> Result<Contact, CoreError> {
        self.get_by_name(name)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("Contact '{name}'")))
    }

    /// Validate and insert a new contact.
    pub async fn create(&self, input: ContactInput) -> Result<Committed<Contact>, CoreError> {
        let ctx = RuleContext {
            name_taken: self.name_in_use(&input.name).await?,
        };
        validate(&input, &ctx).into_result()?;

        let new = input.into_new_contact();
        let contact = self
            .repo
            .insert(&new)
            .await
            .map_err(|e| write_error("insert", e))?;

        tracing::info!(id = contact.id, name = %contact.name, "Contact created");
        Ok(Committed::new(contact, Feedback::Added))
    }

    /// Validate and apply an edit.
    ///
    /// The uniqueness check is skipped when the submitted name equals the
    /// name the record had when the form was opened.
    pub async fn update(&self, update: ContactUpdate) -> Result<Committed<Contact>, CoreError> {
        let name_taken = if update.keeps_name() {
            false
        } else {
            self.name_in_use(&update.input.name).await?
        };
        validate(&update.input, &RuleContext { name_taken }).into_result()?;

        let id = update.id;
        let fields = update.input.into_new_contact();
        self.repo
            .update_by_id(id, &fields)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound(_) => CoreError::NotFound(format!("Contact with ID {id}")),
                other => write_error("update", other),
            })?;

        tracing::info!(id, name = %fields.name, "Contact updated");
        Ok(Committed::new(fields.with_id(id), Feedback::Updated))
    }

    /// Delete the contact with the given name.
    ///
    /// Deleting a name that doesn't exist succeeds.
    pub async fn delete(&self, name: &str) -> Result<Committed<bool>, CoreError> {
        let removed = self
            .repo
            .delete_by_name(name)
            .await
            .map_err(|e| write_error("delete", e))?;

        if removed {
            tracing::info!(name, "Contact deleted");
        } else {
            tracing::debug!(name, "Delete matched no contact");
        }
        Ok(Committed::new(removed, Feedback::Deleted))
    }

    async fn name_in_use(&self, name: &str) -> Result<bool, CoreError> {
        if name.trim().is_empty() {
            return Ok(false);
        }
        Ok(self.repo.find_by_name(name).await?.is_some())
    }
}

/// Map a repository failure during a write.
///
/// A unique-index rejection means another writer took the name between our
/// lookup and the commit; report it exactly like the lookup would have.
fn write_error(op: &str, err: RepositoryError) -> CoreError {
    match err {
        RepositoryError::AlreadyExists(_) => {
            tracing::debug!(op, "Name collision caught by store");
            ValidationErrors::single(Field::Name, NAME_TAKEN).into()
        }
        other => {
            tracing::error!(op, error = %other, "Contact write failed");
            CoreError::Repository(other)
        }
    }
}
