//! Contacts Manager - validated contact management over a pluggable store.
//!
//! Callers talk to a [`ContactManager`], which checks every argument and
//! payload before touching storage and reports absence as a typed failure.
//! Storage sits behind the [`ContactRepository`] trait, with a SQLite
//! implementation and an in-memory one.
//!
//! # Architecture
//!
//! - **models**: the `Contact` record
//! - **domain**: ULID and email value objects, contact validation rules
//! - **error**: error taxonomy (argument, invalid data, not found, storage)
//! - **config**: configuration from environment variables
//! - **db**: SQLite connection bootstrap and schema migrations
//! - **repositories**: the repository trait and its implementations
//! - **services**: the contact manager
//! - **logging**: tracing subscriber setup

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod logging;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::{Config, StoreKind};
pub use domain::{ContactUlid, EmailAddress, ValidationError};
pub use error::{ConfigError, ContactError, ContactResult, RepositoryError, RepositoryResult};
pub use logging::init_logging;
pub use models::Contact;
pub use repositories::{
    open_repository, ContactRepository, InMemoryContactRepository, SqliteContactRepository,
};
pub use services::{ContactManager, ContactManagerImpl};
