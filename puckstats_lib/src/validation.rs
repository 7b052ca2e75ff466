//! Single-argument validators: JSON kind, date and season formats, and
//! upstream status codes.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use puckstats_api::types::Season;
use serde_json::Value;

use crate::error::PuckError;

/// Status codes the NHL APIs are known to answer with.
pub const STATUS_REASONS: &[(u16, &str)] = &[
    (200, "OK"),
    (400, "Bad Request"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (500, "Internal Server Error"),
    (503, "Service Unavailable"),
];

/// Runtime kind of a JSON value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgKind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl ArgKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ArgKind::Null,
            Value::Bool(_) => ArgKind::Bool,
            Value::Number(n) if n.is_i64() || n.is_u64() => ArgKind::Integer,
            Value::Number(_) => ArgKind::Float,
            Value::String(_) => ArgKind::String,
            Value::Array(_) => ArgKind::Array,
            Value::Object(_) => ArgKind::Object,
        }
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArgKind::Null => "null",
            ArgKind::Bool => "bool",
            ArgKind::Integer => "integer",
            ArgKind::Float => "float",
            ArgKind::String => "string",
            ArgKind::Array => "array",
            ArgKind::Object => "object",
        })
    }
}

/// Fails with `TypeMismatch` unless `value` is of kind `expected`.
pub fn validate_type(value: &Value, expected: ArgKind, name: &str) -> Result<(), PuckError> {
    let actual = ArgKind::of(value);
    if actual != expected {
        return Err(PuckError::TypeMismatch {
            expected,
            actual,
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Parse a zero-padded `YYYY-MM-DD` calendar date.
pub fn validate_date_format(date_str: &str) -> Result<NaiveDate, PuckError> {
    let err = || PuckError::Format(format!("Incorrect date format {}, requires YYYY-MM-DD", date_str));
    let bytes = date_str.as_bytes();
    let shaped = bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() });
    if !shaped {
        return Err(err());
    }
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| err())?;
    if date.year() < 1 {
        return Err(err());
    }
    Ok(date)
}

/// Parse an eight-digit season code such as `20192020`.
///
/// Both halves must be years and the second must equal the first or the
/// year after it.
pub fn validate_season_format(season_str: &str) -> Result<Season, PuckError> {
    let format_err = || {
        PuckError::Format(format!(
            "Incorrect season format {}, requires valid YYYYYYYY",
            season_str
        ))
    };
    if season_str.len() != 8 || !season_str.chars().all(|c| c.is_ascii_digit()) {
        return Err(format_err());
    }
    let year = |half: &str| -> Result<i32, PuckError> {
        match half.parse::<i32>() {
            Ok(y) if y >= 1 => Ok(y),
            _ => Err(format_err()),
        }
    };
    let start = year(&season_str[..4])?;
    let end = year(&season_str[4..])?;
    Season::new(start, end).ok_or_else(|| {
        PuckError::Format(format!(
            "Incorrect season range {}, requires a valid season with back-to-back years",
            season_str
        ))
    })
}

/// Reason phrase for a known status code.
pub fn status_reason(code: u16) -> Option<&'static str> {
    STATUS_REASONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, reason)| *reason)
}

/// Builds the `Api` error for a status code, known or not.
pub fn api_error(code: u16) -> PuckError {
    PuckError::Api {
        code,
        reason: status_reason(code).unwrap_or("Unrecognized Status").to_string(),
    }
}

/// Anything but 200 is an error, including codes missing from [`STATUS_REASONS`].
pub fn validate_response_status(code: u16) -> Result<(), PuckError> {
    if code == 200 {
        Ok(())
    } else {
        Err(api_error(code))
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
