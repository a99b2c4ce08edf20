//! Page-number pagination shared by every list endpoint.
//!
//! Callers normalize raw `limit`/`page` values into a [`PageRequest`] before
//! touching the repository; the repository only consumes [`PageRequest::offset`].

use serde::Serialize;

/// Page size used when the caller omits or mangles `limit`.
pub const DEFAULT_LIMIT: i64 = 10;

/// Largest page size a caller may request; larger values are clamped.
pub const MAX_LIMIT: i64 = 100;

/// First page; pages are 1-based.
pub const DEFAULT_PAGE: i64 = 1;

/// A normalized page request. `limit` and `page` are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: i64,
    page: i64,
}

impl PageRequest {
    /// Build a request, replacing missing or non-positive values with defaults
    /// and clamping `limit` to [`MAX_LIMIT`].
    pub fn new(limit: Option<i64>, page: Option<i64>) -> Self {
        Self {
            limit: clamp_limit(limit),
            page: page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE),
        }
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    /// Row offset: `(page - 1) * limit`.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Pagination metadata embedded in the response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub page: i64,
    pub limit: i64,
    pub last_page: i64,
    pub total: i64,
}

impl PageMeta {
    pub fn new(request: PageRequest, total: i64) -> Self {
        Self {
            page: request.page,
            limit: request.limit,
            last_page: last_page(total, request.limit),
            total,
        }
    }
}

fn clamp_limit(limit: Option<i64>) -> i64 {
    limit
        .filter(|l| *l > 0)
        .unwrap_or(DEFAULT_LIMIT)
        .min(MAX_LIMIT)
}

/// `ceil(total / limit)`; zero when there are no rows. Never overflows.
pub fn last_page(total: i64, limit: i64) -> i64 {
    if total <= 0 || limit <= 0 {
        return 0;
    }
    (total - 1) / limit + 1
}
