/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// A driver error annotated with the repository operation that produced it.
#[derive(Debug, thiserror::Error)]
#[error("failed to {operation} {table}: {source}")]
pub struct DbError {
    pub operation: &'static str,
    pub table: &'static str,
    #[source]
    pub source: sqlx::Error,
}

impl DbError {
    pub fn new(operation: &'static str, table: &'static str, source: sqlx::Error) -> Self {
        Self {
            operation,
            table,
            source,
        }
    }

    fn sqlstate(&self) -> Option<String> {
        match &self.source {
            sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
            _ => None,
        }
    }

    /// True when the statement tripped a unique index.
    pub fn is_unique_violation(&self) -> bool {
        self.sqlstate().as_deref() == Some(UNIQUE_VIOLATION)
    }

    /// True when the statement referenced a missing parent row.
    pub fn is_foreign_key_violation(&self) -> bool {
        self.sqlstate().as_deref() == Some(FOREIGN_KEY_VIOLATION)
    }

    /// Name of the violated constraint, if the driver reported one.
    pub fn constraint(&self) -> Option<&str> {
        match &self.source {
            sqlx::Error::Database(db_err) => db_err.constraint(),
            _ => None,
        }
    }
}

impl From<DbError> for wms_core::error::CoreError {
    fn from(err: DbError) -> Self {
        wms_core::error::CoreError::storage("database error", err)
    }
}

/// Attach operation context to a raw `sqlx` result.
pub(crate) trait ResultExt<T> {
    fn context(self, operation: &'static str, table: &'static str) -> Result<T, DbError>;
}

impl<T> ResultExt<T> for Result<T, sqlx::Error> {
    fn context(self, operation: &'static str, table: &'static str) -> Result<T, DbError> {
        self.map_err(|source| DbError::new(operation, table, source))
    }
}
