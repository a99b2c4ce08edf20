//! Shared query parameter types for API handlers.

use serde::Deserialize;
use wms_core::pagination::PageRequest;

/// Page-number pagination parameters (`?limit=&page=`).
///
/// Values are taken as raw strings so that garbage such as `?limit=abc`
/// falls back to the default instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub limit: Option<String>,
    pub page: Option<String>,
}

impl PageParams {
    /// Normalize into a [`PageRequest`] (defaults: limit 10, page 1).
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(parse_lenient(&self.limit), parse_lenient(&self.page))
    }
}

fn parse_lenient(raw: &Option<String>) -> Option<i64> {
    raw.as_deref().and_then(|s| s.trim().parse().ok())
}

/// `?app_id=` selector used by the OTA endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct AppIdParams {
    #[serde(default)]
    pub app_id: String,
}
