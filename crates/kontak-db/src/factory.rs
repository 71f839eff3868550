//! Composition utilities for building services with `SQLite` backends.
//!
//! This module is focused purely on construction and should not contain
//! any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use kontak_core::ports::ContactRepository;
use kontak_core::services::ContactService;

use crate::repositories::SqliteContactRepository;

/// Factory for creating repository and service instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Create a contact repository from a pool.
    pub fn contact_repository(pool: SqlitePool) -> Arc<SqliteContactRepository> {
        Arc::new(SqliteContactRepository::new(pool))
    }

    /// Build a `ContactService` backed by `SQLite`.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repo = CoreFactory::contact_repository(pool);
    /// let service = ContactService::new(repo);
    /// ```
    pub fn build_contact_service(pool: SqlitePool) -> ContactService {
        let repo: Arc<dyn ContactRepository> = Self::contact_repository(pool);
        ContactService::new(repo)
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a contact repository using this test database.
    pub fn contact_repository(&self) -> SqliteContactRepository {
        SqliteContactRepository::new(self.pool.clone())
    }

    /// Create a contact service using this test database.
    pub fn contact_service(&self) -> ContactService {
        CoreFactory::build_contact_service(self.pool.clone())
    }
}
