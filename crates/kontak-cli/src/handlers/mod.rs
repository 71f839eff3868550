//! Command handlers.
//!
//! Each handler delegates to `ContactService` through `CliContext`.

pub mod add;
pub mod list;
pub mod remove;
pub mod serve;
pub mod show;
