//! Request validation beyond serde's shape checks.

use crate::error::AppError;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Deserialize a JSON body into a typed payload. Serde's message names the
/// missing or mistyped field, which becomes the 422 detail.
pub fn parse_body<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
    serde_json::from_value(body).map_err(|e| AppError::Validation(e.to_string()))
}

/// Required string fields must be non-empty after trimming.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

pub fn validate_email(field: &str, value: &str) -> Result<(), AppError> {
    let re = Regex::new(EMAIL_PATTERN)
        .map_err(|_| AppError::Validation(format!("invalid pattern for {}", field)))?;
    if !re.is_match(value) {
        return Err(AppError::Validation(format!(
            "{} must be a valid email address",
            field
        )));
    }
    Ok(())
}

/// Search page size must stay within [1, 100].
pub fn validate_limit(limit: i64) -> Result<(), AppError> {
    if !(1..=100).contains(&limit) {
        return Err(AppError::Validation(
            "limit must be between 1 and 100".into(),
        ));
    }
    Ok(())
}
