//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections from explicit configuration.
//! - Apply the configured busy timeout.
//! - Provision the canonical employee table before returning a connection.
//!
//! # Invariants
//! - Returned connections have `Employee_Details` present.
//! - Existing tables and `PRAGMA user_version` are left untouched.

use super::config::{DbConfig, DbLocation};
use super::schema::create_employee_table;
use super::DbResult;
use crate::repo::employee_repo::EMPLOYEE_TABLE;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::Instant;

/// Opens a SQLite database file and provisions the employee table.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_with_config(&DbConfig::file(path.as_ref()))
}

/// Opens an in-memory SQLite database and provisions the employee table.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_with_config(&DbConfig::default())
}

/// Opens the database described by `config` and provisions the employee table.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
pub fn open_with_config(config: &DbConfig) -> DbResult<Connection> {
    let started_at = Instant::now();
    let mode = config.mode();
    info!("event=db_open module=db status=start mode={mode}");

    let opened = match &config.location {
        DbLocation::Memory => Connection::open_in_memory(),
        DbLocation::File(path) => Connection::open(path),
    };
    let conn = match opened {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&conn, config) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &Connection, config: &DbConfig) -> DbResult<()> {
    conn.busy_timeout(config.busy_timeout())?;
    create_employee_table(conn, EMPLOYEE_TABLE)?;
    Ok(())
}
