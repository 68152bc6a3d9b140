use crate::server::error::AppError;

/// Trims a required text field.
///
/// # Arguments
/// - `field` - Field name used in the error message
/// - `value` - Raw input value
///
/// # Returns
/// - `Ok(String)` - The trimmed value
/// - `Err(AppError::BadRequest)` - The value is empty after trimming
pub fn require_non_empty(field: &str, value: String) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }
    Ok(trimmed.to_string())
}
