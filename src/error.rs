//! Error types for the contacts manager.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::db::DbError;
use crate::domain::ValidationError;
use thiserror::Error;

/// Message carried by every rejected contact payload.
pub const INVALID_CONTACT_MESSAGE: &str = "Invalid contact!";

/// Errors returned by the contact manager.
#[derive(Error, Debug)]
pub enum ContactError {
    /// A key or search term was empty or whitespace-only
    #[error("{0}")]
    Argument(String),

    /// The contact payload failed validation
    #[error("Invalid contact!")]
    InvalidData { violations: Vec<ValidationError> },

    /// A read, search or listing matched nothing
    #[error("{0}")]
    NotFound(String),

    /// The backing store failed
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

impl ContactError {
    /// Rules broken by a rejected payload (empty for other variants).
    pub fn violations(&self) -> &[ValidationError] {
        match self {
            Self::InvalidData { violations } => violations,
            _ => &[],
        }
    }
}

/// Errors raised by repository implementations.
///
/// These are storage failures only; absence is never an error at this layer.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// SQLite statement failed
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Database bootstrap failed
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// Another contact already uses this ULID
    #[error("A contact with ULID {0} already exists")]
    DuplicateUlid(String),

    /// Blocking task could not be joined
    #[error("Storage task failed: {0}")]
    Task(String),

    /// Connection mutex was poisoned by a panicking writer
    #[error("Storage connection poisoned")]
    Poisoned,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with RepositoryError
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
