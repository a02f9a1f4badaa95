use crate::utils::error::{GlobalDriveError, Result};
use std::path::Path;
use url::Url;

/// Upper bound for `service.timeout_seconds`.
pub const MAX_TIMEOUT_SECONDS: u64 = 600;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: &str, reason: impl Into<String>) -> GlobalDriveError {
    GlobalDriveError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Base URL of the model collection; requests go to `{endpoint}/{model}:generateContent`.
pub fn validate_endpoint(field: &str, endpoint: &str) -> Result<()> {
    if endpoint.trim().is_empty() {
        return Err(invalid(field, endpoint, "endpoint cannot be empty"));
    }

    let url = Url::parse(endpoint)
        .map_err(|e| invalid(field, endpoint, format!("not a valid URL: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field,
            endpoint,
            format!("scheme '{}' is not supported, use http or https", url.scheme()),
        ));
    }
    if url.host_str().is_none() {
        return Err(invalid(field, endpoint, "endpoint has no host"));
    }
    // The key is appended as a query parameter; anything already there would end up in logs.
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(
            field,
            endpoint,
            "endpoint must not carry a query string or fragment, set the API key separately",
        ));
    }
    Ok(())
}

/// The model name becomes a single path segment.
pub fn validate_model_name(field: &str, model: &str) -> Result<()> {
    if model.trim().is_empty() {
        return Err(invalid(field, model, "model name cannot be empty"));
    }
    if let Some(c) = model
        .chars()
        .find(|c| c.is_whitespace() || matches!(c, '/' | ':' | '?' | '#'))
    {
        return Err(invalid(
            field,
            model,
            format!("model name cannot contain {:?}", c),
        ));
    }
    Ok(())
}

/// Returns the usable key. The key itself is never copied into an error.
pub fn validate_api_key<'a>(field: &str, key: &'a Option<String>) -> Result<&'a str> {
    let key = key
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or_else(|| GlobalDriveError::MissingConfigError {
            field: field.to_string(),
        })?;

    if let Some(var) = key.strip_prefix("${").and_then(|rest| rest.strip_suffix('}')) {
        return Err(invalid(
            field,
            key,
            format!("environment variable {} is not set", var),
        ));
    }
    if key.chars().any(char::is_whitespace) {
        return Err(invalid(field, "<hidden>", "API key cannot contain whitespace"));
    }
    Ok(key)
}

pub fn validate_timeout(field: &str, seconds: u64) -> Result<()> {
    if !(1..=MAX_TIMEOUT_SECONDS).contains(&seconds) {
        return Err(invalid(
            field,
            &seconds.to_string(),
            format!("timeout must be between 1 and {} seconds", MAX_TIMEOUT_SECONDS),
        ));
    }
    Ok(())
}

/// The preferences path must name a file that can be created or rewritten.
pub fn validate_preferences_path(field: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid(field, path, "path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field, path, "path contains null bytes"));
    }
    if path.ends_with(['/', '\\']) || Path::new(path).file_name().is_none() {
        return Err(invalid(field, path, "path must name a file, not a directory"));
    }
    Ok(())
}
