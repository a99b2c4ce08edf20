//! Product entity model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wms_core::types::{DbId, Timestamp};

use super::Record;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    /// Unique among non-deleted products.
    pub sku: String,
    pub name: String,
    pub description: String,
    pub unit: String,
    pub weight: f64,
    pub dimension: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// DTO for creating or fully replacing a product.
///
/// Missing fields deserialize to empty values and are caught by validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductInput {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub unit: String,
    pub weight: f64,
    pub dimension: String,
}

impl Record for Product {
    type Input = ProductInput;

    const TABLE: &'static str = "products";
    const COLUMNS: &'static str =
        "id, sku, name, description, unit, weight, dimension, created_at, updated_at, deleted_at";

    fn id(&self) -> DbId {
        self.id
    }
}
