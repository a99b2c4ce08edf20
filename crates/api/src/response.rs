//! Shared response envelope types for API handlers.
//!
//! Every response, success or failure, is wrapped as
//! `{ "meta": { "message", "status", "code", "pagination"? }, "data": ... }`.

use axum::http::StatusCode;
use serde::Serialize;
use wms_core::pagination::PageMeta;

/// Outcome flag carried in `meta.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// The `meta` block of the envelope.
#[derive(Debug, Serialize)]
pub struct Meta {
    pub message: String,
    pub status: ResponseStatus,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageMeta>,
}

/// Standard `{ "meta": ..., "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::success(product, "Product retrieved successfully")))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub meta: Meta,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    /// 200 envelope around `data`.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            meta: Meta {
                message: message.into(),
                status: ResponseStatus::Success,
                code: StatusCode::OK.as_u16(),
                pagination: None,
            },
            data,
        }
    }

    /// 200 envelope around one page of rows.
    pub fn paginated(data: T, message: impl Into<String>, pagination: PageMeta) -> Self {
        let mut envelope = Self::success(data, message);
        envelope.meta.pagination = Some(pagination);
        envelope
    }
}

impl Envelope<()> {
    /// Error envelope; `data` serializes as `null`.
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            meta: Meta {
                message: message.into(),
                status: ResponseStatus::Error,
                code: status.as_u16(),
                pagination: None,
            },
            data: (),
        }
    }
}
