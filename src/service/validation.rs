//! Field-level request checks. Each helper names the offending field in its
//! [`AppError::Validation`] message.

use crate::error::AppError;
use regex::Regex;
use std::sync::LazyLock;

pub const EMAIL_MAX_LEN: usize = 255;
pub const NAME_MAX_LEN: usize = 32;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").expect("valid regex"));

/// Unwraps a required field.
pub fn required<T>(field: &str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("{} is required", field)))
}

/// Required string that must also contain something other than whitespace.
pub fn require_non_blank(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(AppError::Validation(format!("{} is required", field))),
    }
}

/// Counts characters, not bytes.
pub fn max_length(field: &str, value: Option<&str>, max: usize) -> Result<(), AppError> {
    match value {
        Some(s) if s.chars().count() > max => Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        ))),
        _ => Ok(()),
    }
}

pub fn positive<T>(field: &str, value: T) -> Result<T, AppError>
where
    T: PartialOrd + Default + Copy,
{
    if value > T::default() {
        Ok(value)
    } else {
        Err(AppError::Validation(format!("{} must be greater than 0", field)))
    }
}

pub fn email(field: &str, value: &str) -> Result<(), AppError> {
    max_length(field, Some(value), EMAIL_MAX_LEN)?;
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(AppError::Validation(format!("{} must be a valid email address", field)))
    }
}

/// Parses an optional query value; parse failures become validation errors for `field`.
pub fn parse_optional<T>(field: &str, raw: Option<&str>) -> Result<Option<T>, AppError>
where
    T: std::str::FromStr,
{
    match raw {
        None => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| AppError::Validation(format!("{} has an invalid value '{}'", field, s))),
    }
}
