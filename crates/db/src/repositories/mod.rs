//! Repository layer.
//!
//! Each repository owns a cloned [`PgPool`](sqlx::PgPool) handed in through
//! its constructor and implements an object-safe async trait, so services
//! can hold `Arc<dyn CrudRepository<E>>` and tests can swap in other stores.

use async_trait::async_trait;
use wms_core::pagination::PageRequest;
use wms_core::types::DbId;

use crate::error::DbError;
use crate::models::Record;

pub mod category_repo;
pub mod customer_repo;
pub mod location_repo;
pub mod ota_repo;
pub mod product_repo;
pub mod soft_delete;
pub mod supplier_repo;

pub use category_repo::CategoryRepo;
pub use customer_repo::CustomerRepo;
pub use location_repo::LocationRepo;
pub use ota_repo::{OtaRepo, OtaRepository};
pub use product_repo::ProductRepo;
pub use supplier_repo::SupplierRepo;

/// CRUD contract for a soft-deletable master-data table.
///
/// Every method is a single statement. Soft-deleted rows are invisible to all
/// of them.
#[async_trait]
pub trait CrudRepository<E: Record>: Send + Sync {
    /// Insert a row, returning it with its store-assigned id and timestamps.
    async fn create(&self, input: &E::Input) -> Result<E, DbError>;

    /// Returns `Ok(None)` when no live row has this id.
    async fn find_by_id(&self, id: DbId) -> Result<Option<E>, DbError>;

    /// Look up a live row by its natural key. Tables without one return `None`.
    async fn find_by_key(&self, _key: &str) -> Result<Option<E>, DbError> {
        Ok(None)
    }

    /// One page of live rows, newest first. Never fails on an empty page.
    async fn list(&self, page: PageRequest) -> Result<Vec<E>, DbError>;

    /// Number of live rows.
    async fn count(&self) -> Result<i64, DbError>;

    /// Replace all business fields. Returns `None` if no live row matched.
    async fn update(&self, id: DbId, input: &E::Input) -> Result<Option<E>, DbError>;

    /// Stamp `deleted_at`. Returns `false` if no live row matched.
    async fn delete(&self, id: DbId) -> Result<bool, DbError>;
}
