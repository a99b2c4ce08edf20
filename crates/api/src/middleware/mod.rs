//! Request-level middleware.
//!
//! - [`request_log::log_requests`] -- one audit line per request with status and latency.

pub mod request_log;
