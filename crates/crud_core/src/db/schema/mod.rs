//! Schema bootstrap for the users/products/categories/addresses tables.
//!
//! # Invariants
//! - The schema is applied at most once per database, inside one transaction.
//! - Applied version is mirrored to `PRAGMA user_version`.
//! - Databases stamped with a newer version are rejected untouched.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// Version stamped into `PRAGMA user_version` once the schema is in place.
pub const SCHEMA_VERSION: u32 = 1;

/// Tables created by the schema, parents before children.
pub const TABLES: &[&str] = &["users", "categories", "products", "addresses"];

const SCHEMA_SQL: &str = include_str!("0001_init.sql");

/// Creates all tables unless the database already carries the schema.
pub fn ensure_schema(conn: &mut Connection) -> DbResult<()> {
    let current_version = current_user_version(conn)?;

    if current_version > SCHEMA_VERSION {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: SCHEMA_VERSION,
        });
    }

    if current_version == SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA_SQL)?;
    tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    tx.commit()?;

    info!("event=schema_bootstrap module=db status=ok version={SCHEMA_VERSION}");
    Ok(())
}

/// Returns the schema version recorded in the database (0 when unset).
pub fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
