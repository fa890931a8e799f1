//! Connection bootstrap for SQLite.

use super::migrations::apply_migrations;
use super::DbResult;
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Open a SQLite database file and apply all pending migrations.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    let started_at = Instant::now();

    let conn = Connection::open(path).map_err(|e| {
        error!(path = %path.display(), error = %e, "Failed to open database");
        e
    })?;

    bootstrap(conn, "file", started_at)
}

/// Open an in-memory SQLite database and apply all pending migrations.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    let conn = Connection::open_in_memory()?;
    bootstrap(conn, "memory", started_at)
}

fn bootstrap(mut conn: Connection, mode: &str, started_at: Instant) -> DbResult<Connection> {
    conn.busy_timeout(Duration::from_secs(5))?;

    if let Err(e) = apply_migrations(&mut conn) {
        error!(mode = %mode, error = %e, "Database migration failed");
        return Err(e);
    }

    info!(
        mode = %mode,
        duration_ms = started_at.elapsed().as_millis() as u64,
        "Database opened"
    );
    Ok(conn)
}
