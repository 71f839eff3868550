//! Terminal output helpers.

pub mod tables;

pub use tables::{contact_table, truncate_string};
