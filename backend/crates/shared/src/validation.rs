//! Cross-cutting field validation rules
//!
//! Lengths are counted in Unicode code points after trimming.

use crate::error::app_error::{AppError, AppResult};

/// Trimmed, non-empty value of `field`.
pub fn required(field: &str, value: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request(format!("The {field} field is required")));
    }
    Ok(trimmed.to_string())
}

/// Required value with at least `min` characters.
pub fn min_chars(field: &str, value: &str, min: usize) -> AppResult<String> {
    let value = required(field, value)?;
    if value.chars().count() < min {
        return Err(AppError::bad_request(format!(
            "The {field} field must be at least {min} characters"
        )));
    }
    Ok(value)
}

/// Required value with at most `max` characters.
pub fn max_chars(field: &str, value: &str, max: usize) -> AppResult<String> {
    let value = required(field, value)?;
    if value.chars().count() > max {
        return Err(AppError::bad_request(format!(
            "The {field} field must be at most {max} characters"
        )));
    }
    Ok(value)
}
