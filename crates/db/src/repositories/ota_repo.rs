//! Repository for the `otas` table.
//!
//! OTA rows are keyed by `app_id` rather than id and are hard-deleted. Several
//! rows may share an `app_id`; the one with the highest `version_code` is the
//! current release.

use async_trait::async_trait;
use sqlx::PgPool;
use wms_core::pagination::PageRequest;

use crate::error::{DbError, ResultExt};
use crate::models::ota::{Ota, OtaInput};

const TABLE: &str = "otas";

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, app_id, version_name, version_code, url, release_notes, created_at, updated_at";

/// Storage contract for OTA releases.
#[async_trait]
pub trait OtaRepository: Send + Sync {
    async fn create(&self, input: &OtaInput) -> Result<Ota, DbError>;

    /// The current release for an app, or `None` if the app has none.
    async fn find_latest(&self, app_id: &str) -> Result<Option<Ota>, DbError>;

    /// One page of releases, newest id first.
    async fn list(&self, page: PageRequest) -> Result<Vec<Ota>, DbError>;

    async fn count(&self) -> Result<i64, DbError>;

    /// Overwrite the current release for `app_id`. Returns `None` if the app
    /// has no release.
    async fn update_latest(&self, app_id: &str, input: &OtaInput)
        -> Result<Option<Ota>, DbError>;

    /// Remove every release for `app_id`, returning the number of rows removed.
    async fn delete_by_app_id(&self, app_id: &str) -> Result<u64, DbError>;
}

/// PostgreSQL-backed [`OtaRepository`].
#[derive(Clone)]
pub struct OtaRepo {
    pool: PgPool,
}

impl OtaRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OtaRepository for OtaRepo {
    async fn create(&self, input: &OtaInput) -> Result<Ota, DbError> {
        let query = format!(
            "INSERT INTO otas (app_id, version_name, version_code, url, release_notes, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ota>(&query)
            .bind(&input.app_id)
            .bind(&input.version_name)
            .bind(input.version_code)
            .bind(&input.url)
            .bind(&input.release_notes)
            .fetch_one(&self.pool)
            .await
            .context("insert", TABLE)
    }

    async fn find_latest(&self, app_id: &str) -> Result<Option<Ota>, DbError> {
        let query = format!(
            "SELECT {COLUMNS} FROM otas
             WHERE app_id = $1
             ORDER BY version_code DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Ota>(&query)
            .bind(app_id)
            .fetch_optional(&self.pool)
            .await
            .context("find by app id", TABLE)
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Ota>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM otas ORDER BY id DESC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Ota>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .context("list", TABLE)
    }

    async fn count(&self) -> Result<i64, DbError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM otas")
            .fetch_one(&self.pool)
            .await
            .context("count", TABLE)
    }

    async fn update_latest(
        &self,
        app_id: &str,
        input: &OtaInput,
    ) -> Result<Option<Ota>, DbError> {
        let query = format!(
            "UPDATE otas SET
                version_name = $2,
                version_code = $3,
                url = $4,
                release_notes = $5,
                updated_at = NOW()
             WHERE id = (
                SELECT id FROM otas
                WHERE app_id = $1
                ORDER BY version_code DESC, id DESC
                LIMIT 1
             )
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ota>(&query)
            .bind(app_id)
            .bind(&input.version_name)
            .bind(input.version_code)
            .bind(&input.url)
            .bind(&input.release_notes)
            .fetch_optional(&self.pool)
            .await
            .context("update", TABLE)
    }

    async fn delete_by_app_id(&self, app_id: &str) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM otas WHERE app_id = $1")
            .bind(app_id)
            .execute(&self.pool)
            .await
            .context("delete", TABLE)?;
        Ok(result.rows_affected())
    }
}
