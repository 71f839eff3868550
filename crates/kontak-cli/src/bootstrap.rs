//! CLI bootstrap - the composition root.
//!
//! Direct commands get a `ContactService` over the configured database.
//! `serve` bootstraps its own context through `kontak_axum`.

use std::path::PathBuf;

use anyhow::Result;
use kontak_core::ContactService;
use kontak_db::{CoreFactory, setup_database};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// SQLite database file.
    pub database_path: PathBuf,
}

impl CliConfig {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }
}

/// Composed application context for CLI commands.
pub struct CliContext {
    pub contacts: ContactService,
}

impl CliContext {
    pub const fn new(contacts: ContactService) -> Self {
        Self { contacts }
    }
}

/// Open (or create) the database and build the context.
pub async fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    tracing::debug!(database_path = %config.database_path.display(), "CLI bootstrap");
    let pool = setup_database(&config.database_path).await?;
    Ok(CliContext::new(CoreFactory::build_contact_service(pool)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bootstrap_opens_fresh_database() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::new(dir.path().join("contacts.db"));

        let ctx = bootstrap(&config).await.unwrap();
        assert!(ctx.contacts.list().await.unwrap().is_empty());
        assert!(config.database_path.exists());
    }
}
