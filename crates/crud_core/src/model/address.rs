//! Address entity.
//!
//! Schema-only: the `addresses` table exists and rows reference `users`, but
//! no DAO exposes it yet.

use super::{
    check_length, require_text, validate_id, EntityId, ValidationError, UNASSIGNED_ID,
};
use serde::{Deserialize, Serialize};

pub const STREET_MAX_CHARS: usize = 255;
pub const CITY_MAX_CHARS: usize = 100;
pub const STATE_MAX_CHARS: usize = 100;
pub const POSTAL_CODE_MAX_CHARS: usize = 20;

/// One row of `addresses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: EntityId,
    pub street: String,
    pub city: String,
    /// Nullable column; not every country uses a state/province.
    pub state: Option<String>,
    pub postal_code: String,
    pub user_id: EntityId,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        user_id: EntityId,
    ) -> Self {
        Self {
            id: UNASSIGNED_ID,
            street: street.into(),
            city: city.into(),
            state: None,
            postal_code: postal_code.into(),
            user_id,
        }
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("street", &self.street, STREET_MAX_CHARS)?;
        require_text("city", &self.city, CITY_MAX_CHARS)?;
        if let Some(state) = self.state.as_deref() {
            check_length("state", state, STATE_MAX_CHARS)?;
        }
        require_text("postal_code", &self.postal_code, POSTAL_CODE_MAX_CHARS)?;
        validate_id(self.user_id)?;
        Ok(())
    }
}
