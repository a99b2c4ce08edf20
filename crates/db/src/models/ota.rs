//! OTA (over-the-air update) model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wms_core::types::{DbId, Timestamp};

/// A row from the `otas` table. OTA rows are hard-deleted, so there is no
/// `deleted_at` column.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Ota {
    pub id: DbId,
    pub app_id: String,
    pub version_name: String,
    /// Monotonic per app; the highest code is the current release.
    pub version_code: i32,
    pub url: String,
    pub release_notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for publishing or replacing an OTA release.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OtaInput {
    pub app_id: String,
    pub version_name: String,
    pub version_code: i32,
    pub url: String,
    pub release_notes: String,
}
