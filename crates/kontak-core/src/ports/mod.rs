//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused for repositories

pub mod contact_repository;

use thiserror::Error;

use crate::validation::ValidationErrors;

pub use contact_repository::ContactRepository;

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same unique key already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error (unreachable database, I/O, etc.).
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters should map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The submission was rejected; carries every field problem found.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// A contact referenced by name or ID does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}
