//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` input DTO shared by create and full update

use serde::de::DeserializeOwned;
use sqlx::postgres::PgRow;
use sqlx::FromRow;
use wms_core::types::DbId;

pub mod category;
pub mod customer;
pub mod location;
pub mod ota;
pub mod product;
pub mod supplier;

/// A soft-deletable master-data row.
///
/// Ties a row type to its table, its column list and the DTO accepted on
/// writes, so list/count/find/delete SQL can be shared across tables.
pub trait Record: for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin + 'static {
    /// Body accepted by create and full update.
    type Input: DeserializeOwned + Send + Sync + 'static;

    const TABLE: &'static str;

    /// Column list shared across queries to avoid repetition.
    const COLUMNS: &'static str;

    fn id(&self) -> DbId;
}
