//! Data access objects and their SQLite implementations.
//!
//! # Responsibility
//! - Define per-entity CRUD contracts (`UserDao`, `ProductDao`, `CategoryDao`).
//! - Keep SQL text and row decoding inside the persistence boundary.
//!
//! # Invariants
//! - Write paths validate input before any statement executes.
//! - Each operation runs exactly one statement on the borrowed connection.
//! - Update/delete report a missing target through the affected-row count of
//!   that same statement, never through a separate existence check.

use crate::db::DbError;
use crate::model::{EntityId, ValidationError};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Params, Row};
use rust_decimal::Decimal;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub mod category_dao;
pub mod product_dao;
pub mod user_dao;

pub type DaoResult<T> = Result<T, DaoError>;

#[derive(Debug)]
pub enum DaoError {
    /// Bad caller input, including update/delete of a missing row.
    InvalidArgument(ValidationError),
    Storage(DbError),
    /// A persisted row could not be decoded into its entity.
    InvalidData(String),
}

impl DaoError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl Display for DaoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for DaoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for DaoError {
    fn from(value: ValidationError) -> Self {
        Self::InvalidArgument(value)
    }
}

impl From<DbError> for DaoError {
    fn from(value: DbError) -> Self {
        Self::Storage(value)
    }
}

impl From<rusqlite::Error> for DaoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Storage(DbError::Sqlite(value))
    }
}

/// Typed column-to-field decoder for one entity.
pub trait FromRow: Sized {
    /// Table the entity is read from, used in error messages.
    const TABLE: &'static str;

    fn from_row(row: &Row<'_>) -> DaoResult<Self>;
}

/// Runs a single-row lookup; no row yields `Ok(None)`.
pub(crate) fn query_optional<T: FromRow, P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> DaoResult<Option<T>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    match rows.next()? {
        Some(row) => Ok(Some(T::from_row(row)?)),
        None => Ok(None),
    }
}

/// Collects every row of `sql` in the order the statement yields them.
pub(crate) fn query_all<T: FromRow, P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> DaoResult<Vec<T>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let mut items = Vec::new();

    while let Some(row) = rows.next()? {
        items.push(T::from_row(row)?);
    }

    Ok(items)
}

/// Maps an affected-row count of zero to the not-found precondition failure.
pub(crate) fn require_changed(
    changed: usize,
    table: &'static str,
    id: EntityId,
) -> DaoResult<()> {
    if changed == 0 {
        return Err(ValidationError::RowNotFound { table, id }.into());
    }
    Ok(())
}

/// Decodes a `DECIMAL(10, 2)` column.
///
/// SQLite stores numeric-affinity values as INTEGER or REAL, so both are
/// accepted and rounded back to two decimal places.
pub(crate) fn decode_decimal(row: &Row<'_>, table: &str, column: &str) -> DaoResult<Decimal> {
    let value = row.get_ref(column)?;
    let decoded = match value {
        ValueRef::Integer(value) => Some(Decimal::from(value)),
        ValueRef::Real(value) => Decimal::from_f64_retain(value).map(|d| d.round_dp(2)),
        ValueRef::Text(bytes) => std::str::from_utf8(bytes)
            .ok()
            .and_then(|text| Decimal::from_str(text.trim()).ok()),
        ValueRef::Null | ValueRef::Blob(_) => None,
    };

    decoded.ok_or_else(|| {
        DaoError::InvalidData(format!(
            "invalid decimal value `{value:?}` in {table}.{column}"
        ))
    })
}
