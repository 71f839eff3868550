//! Core services - the application's business logic layer.
//!
//! Services here are pure orchestrators between ports and domain logic;
//! they don't know about concrete implementations.

mod contact_service;

pub use contact_service::ContactService;
