//! Connection bootstrap utilities for SQLite.
//!
//! # Invariants
//! - Returned connections have a busy timeout set.
//! - Returned connections have the `parcel` table and its client index.

use super::DbResult;
use crate::config::{DbConfig, DEFAULT_BUSY_TIMEOUT_MS};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens a SQLite database file, creating the parcel schema if missing.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_with("file", || Connection::open(path), default_busy_timeout())
}

/// Opens an in-memory SQLite database with the parcel schema.
///
/// Every call yields an independent, empty database.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_with("memory", Connection::open_in_memory, default_busy_timeout())
}

/// Opens the database described by `config`.
///
/// `config.path == None` selects an in-memory database.
pub fn open_db_with_config(config: &DbConfig) -> DbResult<Connection> {
    let busy_timeout = Duration::from_millis(config.busy_timeout_ms);
    match config.path.as_deref() {
        Some(path) => open_with("file", || Connection::open(path), busy_timeout),
        None => open_with("memory", Connection::open_in_memory, busy_timeout),
    }
}

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Creates the `parcel` table and client index when they do not exist yet.
///
/// Safe to run against an already bootstrapped database.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

fn open_with<F>(mode: &str, connect: F, busy_timeout: Duration) -> DbResult<Connection>
where
    F: FnOnce() -> rusqlite::Result<Connection>,
{
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode={mode}");

    let conn = match connect() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={} duration_ms={} error_code=db_open_failed error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&conn, busy_timeout) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode={} duration_ms={}",
                mode,
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={} duration_ms={} error_code=db_bootstrap_failed error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &Connection, busy_timeout: Duration) -> DbResult<()> {
    conn.busy_timeout(busy_timeout)?;
    ensure_schema(conn)
}

fn default_busy_timeout() -> Duration {
    Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS)
}
