//! Error types for the library layer.

use crate::validation::{api_error, validate_response_status, ArgKind};

/// Every failure an entry point can surface. Validation failures are raised
/// before any request is sent; `Api` and `EmptyResult` only after it.
#[derive(thiserror::Error, Debug)]
pub enum PuckError {
    /// A dynamically-typed value had the wrong JSON kind.
    #[error("Expecting {expected} got {actual} for {name}")]
    TypeMismatch {
        expected: ArgKind,
        actual: ArgKind,
        name: String,
    },
    /// A date or season string is malformed.
    #[error("{0}")]
    Format(String),
    /// A value is out of bounds, or a range is misordered.
    #[error("{0}")]
    Range(String),
    /// The upstream API answered with a status other than 200.
    #[error("Response {code} - {reason}")]
    Api { code: u16, reason: String },
    /// A query that must match at least one record matched none.
    #[error("{0}")]
    EmptyResult(String),
    /// Mutually exclusive or missing selection flags.
    #[error("{0}")]
    InvalidSelection(String),
    /// Network failure or undecodable body.
    #[error("Transport error: {0}")]
    Transport(#[source] puckstats_api::Error),
    /// Configuration could not be read or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<puckstats_api::Error> for PuckError {
    fn from(e: puckstats_api::Error) -> Self {
        match e {
            puckstats_api::Error::HttpStatus { status, .. } => validate_response_status(status)
                .err()
                .unwrap_or_else(|| api_error(status)),
            other => PuckError::Transport(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_becomes_api_error() {
        let err: PuckError = puckstats_api::Error::HttpStatus {
            status: 404,
            body: "nope".into(),
        }
        .into();
        assert!(matches!(err, PuckError::Api { code: 404, .. }));
        assert_eq!(err.to_string(), "Response 404 - Not Found");
    }

    #[test]
    fn unrecognized_status_is_still_api_error() {
        let err: PuckError = puckstats_api::Error::HttpStatus {
            status: 418,
            body: String::new(),
        }
        .into();
        assert!(matches!(err, PuckError::Api { code: 418, .. }));
    }

    #[test]
    fn request_failure_is_transport_error() {
        let err: PuckError = puckstats_api::Error::RequestFailed.into();
        assert!(matches!(err, PuckError::Transport(_)));
        assert_eq!(err.to_string(), "Transport error: Request failed");
    }

    #[test]
    fn type_mismatch_names_everything() {
        let err = PuckError::TypeMismatch {
            expected: ArgKind::Integer,
            actual: ArgKind::String,
            name: "pickInRound".into(),
        };
        assert_eq!(err.to_string(), "Expecting integer got string for pickInRound");
    }
}
