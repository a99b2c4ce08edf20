//! Repository for the `products` table.

use async_trait::async_trait;
use sqlx::PgPool;
use wms_core::pagination::PageRequest;
use wms_core::types::DbId;

use super::{soft_delete, CrudRepository};
use crate::error::{DbError, ResultExt};
use crate::models::product::{Product, ProductInput};
use crate::models::Record;

/// Provides CRUD operations for products.
#[derive(Clone)]
pub struct ProductRepo {
    pool: PgPool,
}

impl ProductRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Product> for ProductRepo {
    async fn create(&self, input: &ProductInput) -> Result<Product, DbError> {
        let query = format!(
            "INSERT INTO products (sku, name, description, unit, weight, dimension, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
             RETURNING {}",
            Product::COLUMNS
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.sku)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.unit)
            .bind(input.weight)
            .bind(&input.dimension)
            .fetch_one(&self.pool)
            .await
            .context("insert", Product::TABLE)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, DbError> {
        soft_delete::find_live(&self.pool, id).await
    }

    /// Products are keyed by SKU.
    async fn find_by_key(&self, sku: &str) -> Result<Option<Product>, DbError> {
        let query = format!(
            "SELECT {} FROM products WHERE sku = $1 AND deleted_at IS NULL",
            Product::COLUMNS
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(sku)
            .fetch_optional(&self.pool)
            .await
            .context("find by sku", Product::TABLE)
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Product>, DbError> {
        soft_delete::list_live(&self.pool, page).await
    }

    async fn count(&self) -> Result<i64, DbError> {
        soft_delete::count_live::<Product>(&self.pool).await
    }

    async fn update(&self, id: DbId, input: &ProductInput) -> Result<Option<Product>, DbError> {
        let query = format!(
            "UPDATE products SET
                sku = $2,
                name = $3,
                description = $4,
                unit = $5,
                weight = $6,
                dimension = $7,
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {}",
            Product::COLUMNS
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.sku)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.unit)
            .bind(input.weight)
            .bind(&input.dimension)
            .fetch_optional(&self.pool)
            .await
            .context("update", Product::TABLE)
    }

    async fn delete(&self, id: DbId) -> Result<bool, DbError> {
        soft_delete::soft_delete::<Product>(&self.pool, id).await
    }
}
