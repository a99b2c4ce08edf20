/// Boxed underlying cause carried by [`CoreError::Storage`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Closed set of failure kinds raised by the service layer.
///
/// Handlers map each kind to an HTTP status; they never inspect the message.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A required field is missing or out of range.
    #[error("{0}")]
    Validation(String),

    /// The record (or its natural key) already exists.
    #[error("{0}")]
    Conflict(String),

    /// No live row matches the given key.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, key: String },

    /// Non-positive, non-numeric or empty identifier.
    #[error("{0}")]
    InvalidIdentifier(String),

    /// Unexpected driver or connection failure.
    #[error("{context}: {source}")]
    Storage {
        context: String,
        #[source]
        source: BoxError,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Not-found error keyed by a numeric or textual identifier.
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// Wrap a storage-layer error with the operation that produced it.
    pub fn storage(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        CoreError::Storage {
            context: context.into(),
            source: Box::new(source),
        }
    }
}
