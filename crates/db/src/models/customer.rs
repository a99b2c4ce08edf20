//! Customer entity model and DTO.
//!
//! Customers are the consignees of outbound shipments.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wms_core::types::{DbId, Timestamp};

use super::Record;

/// A row from the `customers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub contact: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// DTO for creating or fully replacing a customer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CustomerInput {
    pub name: String,
    pub address: String,
    pub contact: String,
}

impl Record for Customer {
    type Input = CustomerInput;

    const TABLE: &'static str = "customers";
    const COLUMNS: &'static str = "id, name, address, contact, created_at, updated_at, deleted_at";

    fn id(&self) -> DbId {
        self.id
    }
}
