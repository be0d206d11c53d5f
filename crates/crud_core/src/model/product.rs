//! Product entity.
//!
//! # Responsibility
//! - Mirror one row of `products`.
//! - Keep `price` as an exact decimal that fits `DECIMAL(10, 2)`.
//!
//! # Invariants
//! - `name` is non-empty before persistence.
//! - `price` is non-negative with at most two decimal places.
//! - `category_id` references an existing category (enforced by storage).

use super::{require_text, validate_id, EntityId, ValidationError, UNASSIGNED_ID};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const NAME_MAX_CHARS: usize = 100;
pub const PRICE_SCALE: u32 = 2;

/// Exclusive upper bound of `DECIMAL(10, 2)`: eight integer digits.
const PRICE_LIMIT: i64 = 100_000_000;

/// One row of `products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub price: Decimal,
    pub category_id: EntityId,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Decimal, category_id: EntityId) -> Self {
        Self::with_id(UNASSIGNED_ID, name, price, category_id)
    }

    pub fn with_id(
        id: EntityId,
        name: impl Into<String>,
        price: Decimal,
        category_id: EntityId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category_id,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, NAME_MAX_CHARS)?;
        validate_price(self.price)?;
        validate_id(self.category_id)?;
        Ok(())
    }
}

/// Checks that `price` can be stored in a `DECIMAL(10, 2)` column unchanged.
///
/// More than two decimal places is an error rather than being rounded on
/// write; a stored price always equals the one the caller passed in.
pub fn validate_price(price: Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::NegativePrice);
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(ValidationError::PriceScale {
            max_scale: PRICE_SCALE,
        });
    }
    if price >= Decimal::from(PRICE_LIMIT) {
        return Err(ValidationError::PriceOutOfRange);
    }
    Ok(())
}
