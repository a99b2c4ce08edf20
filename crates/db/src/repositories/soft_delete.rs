//! Statements shared by every soft-deletable table.
//!
//! Table and column names come from [`Record`] constants, never from input;
//! all values are bound positionally.

use sqlx::PgPool;
use wms_core::pagination::PageRequest;
use wms_core::types::DbId;

use crate::error::{DbError, ResultExt};
use crate::models::Record;

/// Find a live row by id.
pub async fn find_live<E: Record>(pool: &PgPool, id: DbId) -> Result<Option<E>, DbError> {
    let query = format!(
        "SELECT {} FROM {} WHERE id = $1 AND deleted_at IS NULL",
        E::COLUMNS,
        E::TABLE
    );
    sqlx::query_as::<_, E>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("find", E::TABLE)
}

/// One page of live rows, newest first. `id` breaks ties between rows
/// created in the same transaction.
pub async fn list_live<E: Record>(pool: &PgPool, page: PageRequest) -> Result<Vec<E>, DbError> {
    let query = format!(
        "SELECT {} FROM {} WHERE deleted_at IS NULL \
         ORDER BY created_at DESC, id DESC \
         LIMIT $1 OFFSET $2",
        E::COLUMNS,
        E::TABLE
    );
    sqlx::query_as::<_, E>(&query)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await
        .context("list", E::TABLE)
}

/// Count live rows.
pub async fn count_live<E: Record>(pool: &PgPool) -> Result<i64, DbError> {
    let query = format!("SELECT COUNT(*) FROM {} WHERE deleted_at IS NULL", E::TABLE);
    sqlx::query_scalar::<_, i64>(&query)
        .fetch_one(pool)
        .await
        .context("count", E::TABLE)
}

/// Soft-delete a live row. Returns `true` if a row was marked deleted.
pub async fn soft_delete<E: Record>(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
    let query = format!(
        "UPDATE {} SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        E::TABLE
    );
    let result = sqlx::query(&query)
        .bind(id)
        .execute(pool)
        .await
        .context("delete", E::TABLE)?;
    Ok(result.rows_affected() > 0)
}
