/*
[INPUT]:  Error sources (HTTP, API, serialization, session, parameters)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Legacy endpoint error codes that mean the credentials were rejected.
const AUTH_ERROR_CODES: [i64; 4] = [101, 102, 103, 105];

/// Main error type for the contacts client
#[derive(Error, Debug)]
pub enum SmsapiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (code {code}): {message}")]
    Api { code: i64, message: String },

    /// Authentication failed or no session is present
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Requested resource does not exist
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Action parameters could not be assembled
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after}s")]
    RateLimit { retry_after: u64 },

    /// Connection timeout
    #[error("Connection timeout after {duration}s")]
    Timeout { duration: u64 },
}

impl SmsapiError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SmsapiError::Http(_)
                | SmsapiError::RateLimit { .. }
                | SmsapiError::Timeout { .. }
                | SmsapiError::InvalidResponse(_)
        )
    }

    /// Get retry delay in seconds (if retryable)
    pub fn retry_delay(&self) -> Option<u64> {
        match self {
            SmsapiError::RateLimit { retry_after } => Some(*retry_after),
            SmsapiError::Timeout { .. } => Some(1),
            _ => None,
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(self, SmsapiError::Authentication { .. })
    }

    /// Create an error from an HTTP status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                SmsapiError::Authentication { message }
            }
            StatusCode::NOT_FOUND => SmsapiError::NotFound { message },
            _ => SmsapiError::Api {
                code: i64::from(status.as_u16()),
                message,
            },
        }
    }

    /// Create an error from a legacy `{"error": code, "message": ...}` body
    pub fn legacy_error(code: i64, message: impl Into<String>) -> Self {
        let message = message.into();
        if AUTH_ERROR_CODES.contains(&code) {
            SmsapiError::Authentication { message }
        } else {
            SmsapiError::Api { code, message }
        }
    }

    pub(crate) fn not_logged_in() -> Self {
        SmsapiError::Authentication {
            message: "not logged in".to_string(),
        }
    }
}

/// Result type alias for contacts client operations
pub type Result<T> = std::result::Result<T, SmsapiError>;
