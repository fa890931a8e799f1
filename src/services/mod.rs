//! Application service layer.
//!
//! The contact manager enforces business rules before any persistence call
//! and turns empty repository results into typed failures.

mod contact_manager;

pub use contact_manager::{ContactManager, ContactManagerImpl};

// Re-export common types used by services
pub use crate::models::Contact;
