//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).
//!
//! # Structure
//!
//! - `contact` - Contact types (`Contact`, `NewContact`, `ContactInput`, `ContactUpdate`)
//! - `feedback` - Post-write status messages (`Feedback`, `Committed`)

mod contact;
mod feedback;

pub use contact::{Contact, ContactInput, ContactUpdate, NewContact};
pub use feedback::{Committed, Feedback};
