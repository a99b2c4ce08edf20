//! Repository for the `locations` table.

use async_trait::async_trait;
use sqlx::PgPool;
use wms_core::pagination::PageRequest;
use wms_core::types::DbId;

use super::{soft_delete, CrudRepository};
use crate::error::{DbError, ResultExt};
use crate::models::location::{Location, LocationInput};
use crate::models::Record;

/// Provides CRUD operations for storage locations.
#[derive(Clone)]
pub struct LocationRepo {
    pool: PgPool,
}

impl LocationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Location> for LocationRepo {
    async fn create(&self, input: &LocationInput) -> Result<Location, DbError> {
        let query = format!(
            r#"INSERT INTO locations (code, zone, "type", capacity, created_at, updated_at)
               VALUES ($1, $2, $3, $4, NOW(), NOW())
               RETURNING {}"#,
            Location::COLUMNS
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(&input.code)
            .bind(&input.zone)
            .bind(&input.location_type)
            .bind(input.capacity)
            .fetch_one(&self.pool)
            .await
            .context("insert", Location::TABLE)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Location>, DbError> {
        soft_delete::find_live(&self.pool, id).await
    }

    /// Locations are keyed by code.
    async fn find_by_key(&self, code: &str) -> Result<Option<Location>, DbError> {
        let query = format!(
            "SELECT {} FROM locations WHERE code = $1 AND deleted_at IS NULL",
            Location::COLUMNS
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .context("find by code", Location::TABLE)
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Location>, DbError> {
        soft_delete::list_live(&self.pool, page).await
    }

    async fn count(&self) -> Result<i64, DbError> {
        soft_delete::count_live::<Location>(&self.pool).await
    }

    async fn update(&self, id: DbId, input: &LocationInput) -> Result<Option<Location>, DbError> {
        let query = format!(
            r#"UPDATE locations SET
                code = $2,
                zone = $3,
                "type" = $4,
                capacity = $5,
                updated_at = NOW()
               WHERE id = $1 AND deleted_at IS NULL
               RETURNING {}"#,
            Location::COLUMNS
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .bind(&input.code)
            .bind(&input.zone)
            .bind(&input.location_type)
            .bind(input.capacity)
            .fetch_optional(&self.pool)
            .await
            .context("update", Location::TABLE)
    }

    async fn delete(&self, id: DbId) -> Result<bool, DbError> {
        soft_delete::soft_delete::<Location>(&self.pool, id).await
    }
}
