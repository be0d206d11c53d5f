//! Category entity, referenced by products through `category_id`.

use super::{require_text, EntityId, ValidationError, UNASSIGNED_ID};
use serde::{Deserialize, Serialize};

pub const NAME_MAX_CHARS: usize = 100;

/// One row of `categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(UNASSIGNED_ID, name)
    }

    pub fn with_id(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, NAME_MAX_CHARS)
    }
}
