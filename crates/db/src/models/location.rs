//! Location entity model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wms_core::types::{DbId, Timestamp};

use super::Record;

/// A row from the `locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Location {
    pub id: DbId,
    /// Unique among non-deleted locations.
    pub code: String,
    pub zone: String,
    /// Storage kind: rack, bin or area.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub location_type: String,
    pub capacity: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// DTO for creating or fully replacing a location.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LocationInput {
    pub code: String,
    pub zone: String,
    #[serde(rename = "type")]
    pub location_type: String,
    pub capacity: f64,
}

impl Record for Location {
    type Input = LocationInput;

    const TABLE: &'static str = "locations";
    const COLUMNS: &'static str =
        r#"id, code, zone, "type", capacity, created_at, updated_at, deleted_at"#;

    fn id(&self) -> DbId {
        self.id
    }
}
