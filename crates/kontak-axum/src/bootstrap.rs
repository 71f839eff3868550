//! Axum server bootstrap - the composition root.
//!
//! This module is the only place where the web adapter is wired to the
//! SQLite store.

use std::path::PathBuf;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use kontak_core::ContactService;
use kontak_db::{CoreFactory, setup_database};

/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 3000;

/// Database file used when none is configured.
pub const DEFAULT_DATABASE: &str = "kontak.db";

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// SQLite database file. Created on first start.
    pub database_path: PathBuf,
    /// Optional directory of static assets (stylesheets, images).
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn with_defaults() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE),
            static_dir: None,
        }
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_database(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    /// Set the static directory served for unmatched paths.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    pub contacts: ContactService,
}

impl AxumContext {
    pub const fn new(contacts: ContactService) -> Self {
        Self { contacts }
    }
}

/// Open (or create) the database and assemble the services.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "kontak.paths",
        database_path = %config.database_path.display(),
        static_dir = ?config.static_dir,
        "Axum bootstrap resolved paths"
    );

    let pool = setup_database(&config.database_path).await?;
    Ok(AxumContext::new(CoreFactory::build_contact_service(pool)))
}

/// Bootstrap and serve until Ctrl-C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;

    if let Some(ref static_dir) = config.static_dir {
        info!("Serving static assets from: {}", static_dir.display());
    }
    let app = crate::routes::create_app(ctx, config.static_dir.as_deref());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("kontak web server listening on http://{}", addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("kontak web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_path, PathBuf::from("kontak.db"));
        assert!(config.static_dir.is_none());
    }

    #[tokio::test]
    async fn bootstrap_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("data").join("kontak.db");
        let config = ServerConfig::with_defaults().with_database(&db).with_port(0);

        let ctx = bootstrap(&config).await.unwrap();
        assert!(ctx.contacts.list().await.unwrap().is_empty());
        assert!(db.exists());
    }
}
