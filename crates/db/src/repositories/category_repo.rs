//! Repository for the `categories` table.

use async_trait::async_trait;
use sqlx::PgPool;
use wms_core::pagination::PageRequest;
use wms_core::types::DbId;

use super::{soft_delete, CrudRepository};
use crate::error::{DbError, ResultExt};
use crate::models::category::{Category, CategoryInput};
use crate::models::Record;

/// Provides CRUD operations for categories.
///
/// `parent_id` is enforced by a foreign key; a dangling parent surfaces as a
/// [`DbError`] with [`DbError::is_foreign_key_violation`] set.
#[derive(Clone)]
pub struct CategoryRepo {
    pool: PgPool,
}

impl CategoryRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Category> for CategoryRepo {
    async fn create(&self, input: &CategoryInput) -> Result<Category, DbError> {
        let query = format!(
            "INSERT INTO categories (name, parent_id, created_at, updated_at)
             VALUES ($1, $2, NOW(), NOW())
             RETURNING {}",
            Category::COLUMNS
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(input.parent_id)
            .fetch_one(&self.pool)
            .await
            .context("insert", Category::TABLE)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Category>, DbError> {
        soft_delete::find_live(&self.pool, id).await
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Category>, DbError> {
        soft_delete::list_live(&self.pool, page).await
    }

    async fn count(&self) -> Result<i64, DbError> {
        soft_delete::count_live::<Category>(&self.pool).await
    }

    async fn update(&self, id: DbId, input: &CategoryInput) -> Result<Option<Category>, DbError> {
        let query = format!(
            "UPDATE categories SET
                name = $2,
                parent_id = $3,
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {}",
            Category::COLUMNS
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.parent_id)
            .fetch_optional(&self.pool)
            .await
            .context("update", Category::TABLE)
    }

    async fn delete(&self, id: DbId) -> Result<bool, DbError> {
        soft_delete::soft_delete::<Category>(&self.pool, id).await
    }
}
