//! Error types for ynr.
//!
//! Uses thiserror for ergonomic error definitions that integrate
//! with axum's response system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Resource errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid version in URL path: {0}")]
    UnsupportedVersion(String),

    // Projection errors
    #[error("Missing related record: {0}")]
    MissingRelated(String),

    #[error("Malformed stored JSON: {0}")]
    MalformedJson(String),

    #[error("No reverse match: {0}")]
    NoReverseMatch(String),

    // Data source errors
    #[error("Invalid dataset: {0}")]
    InvalidData(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 404
            Self::NotFound(_) | Self::UnsupportedVersion(_) => StatusCode::NOT_FOUND,

            // 500
            Self::MissingRelated(_)
            | Self::MalformedJson(_)
            | Self::NoReverseMatch(_)
            | Self::InvalidData(_)
            | Self::Config(_)
            | Self::Internal(_)
            | Self::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::UnsupportedVersion(_) => "UNSUPPORTED_VERSION",
            Self::MissingRelated(_) => "MISSING_RELATED",
            Self::MalformedJson(_) => "MALFORMED_JSON",
            Self::NoReverseMatch(_) => "NO_REVERSE_MATCH",
            Self::InvalidData(_) => "INVALID_DATA",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Other(_) => "UNKNOWN_ERROR",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(code, "{}", message);
        } else {
            tracing::debug!(code, "{}", message);
        }

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::Internal(format!("URL parsing error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            Error::NotFound("person 1".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::UnsupportedVersion("v2".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::MalformedJson("eof".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::MissingRelated("election 2017".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::NoReverseMatch("x".into()).error_code(), "NO_REVERSE_MATCH");
        assert_eq!(
            Error::UnsupportedVersion("v2".into()).error_code(),
            "UNSUPPORTED_VERSION"
        );
    }
}
