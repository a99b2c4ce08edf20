//! Request extractors with envelope-shaped rejections.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Message returned when a write endpoint receives no body at all.
pub const MISSING_BODY: &str = "Missing request body. Please provide a valid JSON payload.";

/// JSON body extractor.
///
/// Unlike [`axum::Json`], an empty body is reported as [`MISSING_BODY`]
/// rather than a parse error, malformed JSON becomes a 400 carrying the
/// parser message, and the `Content-Type` header is not enforced.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| match rejection.status() {
                StatusCode::BAD_REQUEST => AppError::BadRequest(rejection.body_text()),
                status => AppError::Rejected(status, rejection.body_text()),
            })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::BadRequest(MISSING_BODY.to_string()));
        }

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| AppError::BadRequest(e.to_string()))
    }
}
