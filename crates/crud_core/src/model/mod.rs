//! Entity model for the users/products/categories/addresses schema.
//!
//! # Responsibility
//! - Define plain value types mirroring one row of each table.
//! - Own field-level validation so DAOs can reject input before any SQL runs.
//!
//! # Invariants
//! - `id == 0` means "not yet persisted"; storage assigns ids on insert.
//! - Equality is value equality over every field, id included.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod address;
pub mod category;
pub mod product;
pub mod user;

/// Identifier assigned by storage on insert.
pub type EntityId = i64;

/// Id carried by entities that have not been persisted yet.
pub const UNASSIGNED_ID: EntityId = 0;

/// Caller-fixable input problems, raised before any statement executes.
///
/// `RowNotFound` is the precondition failure of update/delete and stays in
/// this family instead of being a distinct not-found signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NegativeId(EntityId),
    EmptyField(&'static str),
    FieldTooLong { field: &'static str, max_chars: usize },
    NegativePrice,
    PriceScale { max_scale: u32 },
    PriceOutOfRange,
    RowNotFound { table: &'static str, id: EntityId },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeId(id) => write!(f, "id cannot be negative: {id}"),
            Self::EmptyField(field) => write!(f, "{field} cannot be empty"),
            Self::FieldTooLong { field, max_chars } => {
                write!(f, "{field} exceeds {max_chars} characters")
            }
            Self::NegativePrice => write!(f, "price cannot be negative"),
            Self::PriceScale { max_scale } => {
                write!(f, "price allows at most {max_scale} decimal places")
            }
            Self::PriceOutOfRange => write!(f, "price does not fit DECIMAL(10, 2)"),
            Self::RowNotFound { table, id } => {
                write!(f, "row with id {id} does not exist in {table}")
            }
        }
    }
}

impl Error for ValidationError {}

/// Rejects negative ids.
pub fn validate_id(id: EntityId) -> Result<(), ValidationError> {
    if id < 0 {
        return Err(ValidationError::NegativeId(id));
    }
    Ok(())
}

/// Checks a required text column: non-empty and within its VARCHAR length.
///
/// Whitespace-only values count as present.
pub(crate) fn require_text(
    field: &'static str,
    value: &str,
    max_chars: usize,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    check_length(field, value, max_chars)
}

pub(crate) fn check_length(
    field: &'static str,
    value: &str,
    max_chars: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() > max_chars {
        return Err(ValidationError::FieldTooLong { field, max_chars });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{require_text, validate_id, ValidationError};

    #[test]
    fn validate_id_accepts_zero_and_rejects_negative() {
        assert!(validate_id(0).is_ok());
        assert_eq!(validate_id(-1), Err(ValidationError::NegativeId(-1)));
    }

    #[test]
    fn require_text_rejects_empty_and_overlong_values() {
        assert_eq!(
            require_text("name", "", 10),
            Err(ValidationError::EmptyField("name"))
        );
        assert!(require_text("name", "   ", 10).is_ok());
        assert_eq!(
            require_text("name", "abcdef", 5),
            Err(ValidationError::FieldTooLong {
                field: "name",
                max_chars: 5
            })
        );
        assert!(require_text("name", "héllo", 5).is_ok());
    }
}
