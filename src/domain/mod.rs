//! Domain value objects and validation rules.
//!
//! This module contains type-safe wrappers for the contact's public handle
//! and email address, plus the all-or-nothing validation helper shared by
//! the manager's add and update paths.

pub mod email;
pub mod errors;
pub mod ulid;
pub mod validation;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use ulid::ContactUlid;
pub use validation::{contact_violations, validate_contact, MAX_NAME_LENGTH};
