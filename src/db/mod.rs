//! SQLite bootstrap and schema migrations.
//!
//! Migration state is tracked with `PRAGMA user_version`; no contact data is
//! read or written before migrations succeed.

use thiserror::Error;

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

/// Errors raised while opening or migrating a database.
#[derive(Error, Debug)]
pub enum DbError {
    /// SQLite refused the connection or a migration statement
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The file was written by a newer schema than this build knows
    #[error("database schema version {db_version} is newer than supported {latest_supported}")]
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

/// Convenience type alias for Results with DbError
pub type DbResult<T> = Result<T, DbError>;
