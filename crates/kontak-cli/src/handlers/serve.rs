//! Serve command handler.

use std::path::{Path, PathBuf};

use anyhow::Result;
use kontak_axum::{ServerConfig, start_server};

/// Static directory used when none is given and it exists.
pub const DEFAULT_STATIC_DIR: &str = "./public";

/// Build the server configuration from resolved CLI settings.
pub fn server_config(database: &Path, port: u16, static_dir: Option<PathBuf>) -> ServerConfig {
    let config = ServerConfig::with_defaults()
        .with_port(port)
        .with_database(database);

    match static_dir.or_else(default_static_dir) {
        Some(dir) => config.with_static_dir(dir),
        None => {
            tracing::info!("No static directory; serving pages without assets");
            config
        }
    }
}

fn default_static_dir() -> Option<PathBuf> {
    let dir = PathBuf::from(DEFAULT_STATIC_DIR);
    dir.is_dir().then_some(dir)
}

pub async fn execute(database: &Path, port: u16, static_dir: Option<PathBuf>) -> Result<()> {
    start_server(server_config(database, port, static_dir)).await
}
