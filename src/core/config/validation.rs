//! Validation helper functions for configuration types.

use url::Url;

use crate::core::errors::{Result, TownsplitError};

/// Validate that a usize value is greater than zero.
pub fn validate_positive_usize(value: usize, field: &str) -> Result<()> {
    if value == 0 {
        return Err(TownsplitError::config_field(
            format!("{} must be greater than 0", field),
            field,
        ));
    }
    Ok(())
}

/// Validate that a u64 value is greater than zero.
pub fn validate_positive_u64(value: u64, field: &str) -> Result<()> {
    if value == 0 {
        return Err(TownsplitError::config_field(
            format!("{} must be greater than 0", field),
            field,
        ));
    }
    Ok(())
}

/// Validate that a string value is not blank.
pub fn validate_non_empty(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TownsplitError::config_field(
            format!("{} must not be empty", field),
            field,
        ));
    }
    Ok(())
}

/// Validate that a value parses as an absolute http(s) URL.
pub fn validate_http_url(value: &str, field: &str) -> Result<Url> {
    let url = Url::parse(value).map_err(|e| {
        TownsplitError::config_field(format!("{} is not a valid URL: {}", field, e), field)
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(TownsplitError::config_field(
            format!("{} must use http or https, not {}", field, other),
            field,
        )),
    }
}
