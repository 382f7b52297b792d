/*
[INPUT]:  Error sources (HTTP, service status, response decoding, configuration)
[OUTPUT]: Structured error types with service/transport classification
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::ErrorResponse;

/// Message used when a failure response carries no `error` text
pub const SERVICE_ERROR_FALLBACK: &str = "Failed to analyze tasks";

/// Main error type for the task analyzer adapter
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a failure status
    #[error("{message}")]
    Service {
        status: u16,
        message: String,
        cycles: Vec<Vec<i64>>,
    },

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Success response did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AnalyzerError {
    /// Build a service error from a failure status and its (optional) body
    pub fn service_error(status: StatusCode, body: Option<ErrorResponse>) -> Self {
        let (message, cycles) = match body {
            Some(ErrorResponse { error, cycles }) => (
                error
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| SERVICE_ERROR_FALLBACK.to_string()),
                cycles,
            ),
            None => (SERVICE_ERROR_FALLBACK.to_string(), Vec::new()),
        };
        AnalyzerError::Service {
            status: status.as_u16(),
            message,
            cycles,
        }
    }

    /// Check if the service itself reported the failure
    pub fn is_service_error(&self) -> bool {
        matches!(self, AnalyzerError::Service { .. })
    }

    /// HTTP status of a service error
    pub fn status(&self) -> Option<u16> {
        match self {
            AnalyzerError::Service { status, .. } => Some(*status),
            AnalyzerError::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for analyzer operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_uses_body_message() {
        let body = ErrorResponse {
            error: Some("bad strategy".to_string()),
            cycles: Vec::new(),
        };
        let err = AnalyzerError::service_error(StatusCode::BAD_REQUEST, Some(body));
        assert_eq!(err.to_string(), "bad strategy");
        assert_eq!(err.status(), Some(400));
        assert!(err.is_service_error());
    }

    #[test]
    fn test_service_error_fallback() {
        let err = AnalyzerError::service_error(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert_eq!(err.to_string(), SERVICE_ERROR_FALLBACK);

        let empty = ErrorResponse {
            error: Some(String::new()),
            cycles: Vec::new(),
        };
        let err = AnalyzerError::service_error(StatusCode::BAD_REQUEST, Some(empty));
        assert_eq!(err.to_string(), SERVICE_ERROR_FALLBACK);
    }

    #[test]
    fn test_service_error_keeps_cycles() {
        let body = ErrorResponse {
            error: Some("Circular dependencies detected".to_string()),
            cycles: vec![vec![1, 2, 1]],
        };
        match AnalyzerError::service_error(StatusCode::BAD_REQUEST, Some(body)) {
            AnalyzerError::Service { cycles, .. } => assert_eq!(cycles, vec![vec![1, 2, 1]]),
            _ => panic!("Expected Service error variant"),
        }
    }

    #[test]
    fn test_config_error_is_not_service_error() {
        let err = AnalyzerError::Config("missing".to_string());
        assert!(!err.is_service_error());
        assert_eq!(err.status(), None);
    }
}
