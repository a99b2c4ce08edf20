//! HTTP handlers. Each returns the shared response envelope.

pub mod master_data;
pub mod ota;
