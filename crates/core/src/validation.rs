//! Required-field checks.
//!
//! Each helper returns `CoreError::Validation("<field> is required")` so a
//! checklist can be written as a chain of `?` calls that stops at the first
//! unmet requirement.

use crate::error::CoreError;

fn required(field: &str) -> CoreError {
    CoreError::Validation(format!("{field} is required"))
}

/// Reject empty or whitespace-only text.
pub fn require_text(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(required(field));
    }
    Ok(())
}

/// Reject zero, negative and NaN quantities.
pub fn require_positive(value: f64, field: &str) -> Result<(), CoreError> {
    if value.is_nan() || value <= 0.0 {
        return Err(required(field));
    }
    Ok(())
}

/// Reject zero and negative integer values with a custom message.
pub fn require_positive_int(value: i64, message: &str) -> Result<(), CoreError> {
    if value <= 0 {
        return Err(CoreError::Validation(message.to_string()));
    }
    Ok(())
}
