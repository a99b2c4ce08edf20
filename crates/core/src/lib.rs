//! Domain building blocks shared by the database and API crates.
//!
//! Everything here is pure logic: error kinds, id/timestamp aliases,
//! pagination math and required-field checks. No I/O.

pub mod error;
pub mod pagination;
pub mod types;
pub mod validation;
