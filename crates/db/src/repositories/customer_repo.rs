//! Repository for the `customers` table.

use async_trait::async_trait;
use sqlx::PgPool;
use wms_core::pagination::PageRequest;
use wms_core::types::DbId;

use super::{soft_delete, CrudRepository};
use crate::error::{DbError, ResultExt};
use crate::models::customer::{Customer, CustomerInput};
use crate::models::Record;

/// Provides CRUD operations for customers.
#[derive(Clone)]
pub struct CustomerRepo {
    pool: PgPool,
}

impl CustomerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Customer> for CustomerRepo {
    async fn create(&self, input: &CustomerInput) -> Result<Customer, DbError> {
        let query = format!(
            "INSERT INTO customers (name, address, contact, created_at, updated_at)
             VALUES ($1, $2, $3, NOW(), NOW())
             RETURNING {}",
            Customer::COLUMNS
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.contact)
            .fetch_one(&self.pool)
            .await
            .context("insert", Customer::TABLE)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Customer>, DbError> {
        soft_delete::find_live(&self.pool, id).await
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Customer>, DbError> {
        soft_delete::list_live(&self.pool, page).await
    }

    async fn count(&self) -> Result<i64, DbError> {
        soft_delete::count_live::<Customer>(&self.pool).await
    }

    async fn update(&self, id: DbId, input: &CustomerInput) -> Result<Option<Customer>, DbError> {
        let query = format!(
            "UPDATE customers SET
                name = $2,
                address = $3,
                contact = $4,
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {}",
            Customer::COLUMNS
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.contact)
            .fetch_optional(&self.pool)
            .await
            .context("update", Customer::TABLE)
    }

    async fn delete(&self, id: DbId) -> Result<bool, DbError> {
        soft_delete::soft_delete::<Customer>(&self.pool, id).await
    }
}
