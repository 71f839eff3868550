#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{Committed, Contact, ContactInput, ContactUpdate, Feedback, NewContact};
pub use ports::{ContactRepository, CoreError, RepositoryError};
pub use services::ContactService;
pub use validation::{Field, FieldError, ValidationErrors};

// Dev-dependencies used only by the integration suite
#[cfg(test)]
use mockall as _;
