//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections for a `DbEndpoint`.
//! - Configure connection pragmas required by the DAOs.
//! - Apply the schema before returning a usable connection.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON`.
//! - Returned connections have the schema fully applied.

use super::schema::ensure_schema;
use super::{DbEndpoint, DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens a SQLite database file and applies the schema.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_endpoint(&DbEndpoint::File(path.as_ref().to_path_buf()))
}

/// Opens a fresh in-memory SQLite database and applies the schema.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_endpoint(&DbEndpoint::Memory)
}

/// Opens `endpoint`, configures pragmas and applies the schema.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
///
/// # Errors
/// - `DbError::Open` when SQLite cannot open the endpoint.
/// - Any bootstrap failure (pragmas, schema) is returned unchanged.
pub fn open_endpoint(endpoint: &DbEndpoint) -> DbResult<Connection> {
    let started_at = Instant::now();
    let mode = endpoint.mode();
    info!("event=db_open module=db status=start mode={mode}");

    let opened = match endpoint {
        DbEndpoint::Memory => Connection::open_in_memory(),
        DbEndpoint::File(path) => Connection::open(path),
    };
    let mut conn = match opened {
        Ok(conn) => conn,
        Err(source) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_open_failed error={source}",
                started_at.elapsed().as_millis()
            );
            return Err(DbError::Open {
                endpoint: endpoint.clone(),
                source,
            });
        }
    };

    if let Err(err) = bootstrap_connection(&mut conn) {
        error!(
            "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_bootstrap_failed error={err}",
            started_at.elapsed().as_millis()
        );
        return Err(err);
    }

    info!(
        "event=db_open module=db status=ok mode={mode} duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(conn)
}

fn bootstrap_connection(conn: &mut Connection) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    ensure_schema(conn)?;
    Ok(())
}
