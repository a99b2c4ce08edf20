//! Repository for the `suppliers` table.

use async_trait::async_trait;
use sqlx::PgPool;
use wms_core::pagination::PageRequest;
use wms_core::types::DbId;

use super::{soft_delete, CrudRepository};
use crate::error::{DbError, ResultExt};
use crate::models::supplier::{Supplier, SupplierInput};
use crate::models::Record;

/// Provides CRUD operations for suppliers.
#[derive(Clone)]
pub struct SupplierRepo {
    pool: PgPool,
}

impl SupplierRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Supplier> for SupplierRepo {
    async fn create(&self, input: &SupplierInput) -> Result<Supplier, DbError> {
        let query = format!(
            "INSERT INTO suppliers (name, address, contact, created_at, updated_at)
             VALUES ($1, $2, $3, NOW(), NOW())
             RETURNING {}",
            Supplier::COLUMNS
        );
        sqlx::query_as::<_, Supplier>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.contact)
            .fetch_one(&self.pool)
            .await
            .context("insert", Supplier::TABLE)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Supplier>, DbError> {
        soft_delete::find_live(&self.pool, id).await
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Supplier>, DbError> {
        soft_delete::list_live(&self.pool, page).await
    }

    async fn count(&self) -> Result<i64, DbError> {
        soft_delete::count_live::<Supplier>(&self.pool).await
    }

    async fn update(&self, id: DbId, input: &SupplierInput) -> Result<Option<Supplier>, DbError> {
        let query = format!(
            "UPDATE suppliers SET
                name = $2,
                address = $3,
                contact = $4,
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {}",
            Supplier::COLUMNS
        );
        sqlx::query_as::<_, Supplier>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.contact)
            .fetch_optional(&self.pool)
            .await
            .context("update", Supplier::TABLE)
    }

    async fn delete(&self, id: DbId) -> Result<bool, DbError> {
        soft_delete::soft_delete::<Supplier>(&self.pool, id).await
    }
}
