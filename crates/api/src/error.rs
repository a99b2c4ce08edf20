use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use wms_core::error::CoreError;

use crate::response::Envelope;

/// Message returned for any failure whose cause must not leak to clients.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the error envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `wms_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A malformed request (missing body, bad JSON) with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A request the framework refused before decoding (e.g. body over the size limit).
    #[error("Request rejected: {1}")]
    Rejected(StatusCode, String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status and client-facing message for this error.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg)
                | CoreError::Conflict(msg)
                | CoreError::InvalidIdentifier(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::Storage { .. } | CoreError::Internal(_) => {
                    tracing::error!(error = %core, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
                }
            },
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Rejected(status, msg) => (*status, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Core(CoreError::NotFound { entity, key }) = &self {
            tracing::debug!(entity = *entity, key = %key, "Lookup missed");
        }
        let (status, message) = self.status_and_message();
        (status, Json(Envelope::error(status, message))).into_response()
    }
}
