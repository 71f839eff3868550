//! HTTP request handlers for the kontak web server.
//!
//! Handlers are thin wrappers that delegate to `ContactService` and hand
//! the result to the views.

pub mod contacts;
pub mod pages;
