//! Category entity model and DTO.
//!
//! Categories form a tree through the optional `parent_id` self-reference.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wms_core::types::{DbId, Timestamp};

use super::Record;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub parent_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// DTO for creating or fully replacing a category.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CategoryInput {
    pub name: String,
    pub parent_id: Option<DbId>,
}

impl Record for Category {
    type Input = CategoryInput;

    const TABLE: &'static str = "categories";
    const COLUMNS: &'static str = "id, name, parent_id, created_at, updated_at, deleted_at";

    fn id(&self) -> DbId {
        self.id
    }
}
