#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use http_body_util as _;

pub mod bootstrap;
pub mod error;
pub mod flash;
pub mod handlers;
pub mod method_override;
pub mod routes;
pub mod state;
pub mod views;

// Re-export primary types
pub use bootstrap::{AxumContext, DEFAULT_PORT, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use method_override::{MethodOverride, with_method_override};
pub use routes::{create_app, create_router};
pub use state::AppState;
