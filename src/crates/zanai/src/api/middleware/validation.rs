//! Request validation utilities
//!
//! Provides validation helpers for ensuring request data meets requirements.

use crate::api::error::{ApiError, ApiResult};

/// Validate that a required string field is not empty
pub fn validate_not_empty(value: &str, field_name: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::ValidationError(format!(
            "{} cannot be empty",
            field_name
        )));
    }
    Ok(())
}

/// Validate string length constraints
pub fn validate_string_length(
    value: &str,
    field_name: &str,
    min: usize,
    max: usize,
) -> ApiResult<()> {
    if value.len() < min || value.len() > max {
        return Err(ApiError::ValidationError(format!(
            "{} must be between {} and {} characters",
            field_name, min, max
        )));
    }
    Ok(())
}

/// Validate that a field value is one of an allowed set
pub fn validate_one_of(value: &str, field_name: &str, allowed: &[&str]) -> ApiResult<()> {
    if !allowed.contains(&value) {
        return Err(ApiError::ValidationError(format!(
            "{} must be one of: {}",
            field_name,
            allowed.join(", ")
        )));
    }
    Ok(())
}
