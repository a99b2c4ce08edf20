//! Supplier entity model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wms_core::types::{DbId, Timestamp};

use super::Record;

/// A row from the `suppliers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Supplier {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub contact: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// DTO for creating or fully replacing a supplier.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SupplierInput {
    pub name: String,
    pub address: String,
    pub contact: String,
}

impl Record for Supplier {
    type Input = SupplierInput;

    const TABLE: &'static str = "suppliers";
    const COLUMNS: &'static str = "id, name, address, contact, created_at, updated_at, deleted_at";

    fn id(&self) -> DbId {
        self.id
    }
}
