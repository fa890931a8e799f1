//! Configuration management for the contacts manager.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Database path that selects a private in-memory SQLite database.
pub const IN_MEMORY_DB_PATH: &str = ":memory:";

/// Which repository backs the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// SQLite file (or `:memory:`) database
    Sqlite,
    /// Process-local map, lost on exit
    Memory,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(StoreKind::Sqlite),
            "memory" => Ok(StoreKind::Memory),
            other => Err(format!("Must be 'sqlite' or 'memory', got: {}", other)),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Sqlite => write!(f, "sqlite"),
            StoreKind::Memory => write!(f, "memory"),
        }
    }
}

/// Configuration for the contacts manager.
#[derive(Debug, Clone)]
pub struct Config {
    /// Repository implementation (default: sqlite)
    pub store: StoreKind,

    /// SQLite database path (default: "contacts.db")
    pub database_path: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_STORE`: `sqlite` or `memory` (default: `sqlite`)
    /// - `CONTACTS_DB_PATH`: SQLite file, or `:memory:` (default: `contacts.db`)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not.
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let store = match env::var("CONTACTS_STORE") {
            Ok(val) => val.parse::<StoreKind>().map_err(|reason| ConfigError::InvalidValue {
                var: "CONTACTS_STORE".to_string(),
                reason,
            })?,
            Err(_) => StoreKind::Sqlite,
        };

        let database_path =
            env::var("CONTACTS_DB_PATH").unwrap_or_else(|_| "contacts.db".to_string());

        if database_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_DB_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            store,
            database_path,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store: StoreKind::Sqlite,
            database_path: IN_MEMORY_DB_PATH.to_string(),
            log_level: "error".to_string(),
        }
    }
}
