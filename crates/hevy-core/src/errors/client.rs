// ABOUTME: Structured errors for Hevy API client operations
// ABOUTME: Maps HTTP transport and status failures onto AppError external-service codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

use super::{AppError, ErrorCode};

/// Errors returned by the remote Hevy API client
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response
    #[error("Network error calling Hevy API: {0}")]
    Network(String),

    /// The API rejected the configured API key
    #[error("Hevy API authentication failed (status {status_code}): {reason}")]
    AuthenticationFailed {
        /// HTTP status returned (401 or 403)
        status_code: u16,
        /// Response body or reason text
        reason: String,
    },

    /// Rate limit exceeded
    #[error("Hevy API rate limit exceeded, retry after {retry_after_secs} seconds")]
    RateLimitExceeded {
        /// Seconds to wait, from the `Retry-After` header when present
        retry_after_secs: u64,
    },

    /// The requested entity does not exist remotely
    #[error("Hevy API resource not found: {resource}")]
    NotFound {
        /// Request path that returned 404
        resource: String,
    },

    /// Any other non-success response
    #[error("Hevy API error (status {status_code}): {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Response body text
        message: String,
    },

    /// The response body could not be decoded
    #[error("Invalid response from Hevy API: {0}")]
    InvalidResponse(String),
}

/// Result type for Hevy API client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Whether retrying the same request could succeed
    ///
    /// The server never retries on its own; this is informational for callers.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::RateLimitExceeded { .. } => true,
            Self::ApiError { status_code, .. } => *status_code >= 500,
            Self::AuthenticationFailed { .. } | Self::NotFound { .. } | Self::InvalidResponse(_) => {
                false
            }
        }
    }

    /// Error code used when this error becomes an `AppError`
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::Network(_) => ErrorCode::ExternalServiceUnavailable,
            Self::AuthenticationFailed { .. } => ErrorCode::ExternalAuthFailed,
            Self::RateLimitExceeded { .. } => ErrorCode::ExternalRateLimited,
            Self::NotFound { .. } => ErrorCode::ExternalNotFound,
            Self::ApiError { .. } | Self::InvalidResponse(_) => ErrorCode::ExternalServiceError,
        }
    }
}

impl From<ClientError> for AppError {
    fn from(error: ClientError) -> Self {
        Self::new(error.error_code(), error.to_string()).with_source(error)
    }
}

#[cfg(feature = "client-errors")]
impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::InvalidResponse(error.to_string())
        } else if let Some(status) = error.status() {
            Self::ApiError {
                status_code: status.as_u16(),
                message: error.to_string(),
            }
        } else {
            Self::Network(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_converts_to_external_code() {
        let app: AppError = ClientError::AuthenticationFailed {
            status_code: 401,
            reason: "invalid api key".to_owned(),
        }
        .into();
        assert_eq!(app.code, ErrorCode::ExternalAuthFailed);
        assert!(app.message.contains("invalid api key"));
        assert!(app.code.is_external());
    }

    #[test]
    fn test_retryable_classification() {
        assert!(ClientError::Network("connection reset".to_owned()).is_retryable());
        assert!(ClientError::ApiError {
            status_code: 503,
            message: String::new(),
        }
        .is_retryable());
        assert!(!ClientError::ApiError {
            status_code: 400,
            message: String::new(),
        }
        .is_retryable());
        assert!(!ClientError::NotFound {
            resource: "/v1/workouts/x".to_owned(),
        }
        .is_retryable());
    }

    #[test]
    fn test_rate_limit_message() {
        let err = ClientError::RateLimitExceeded {
            retry_after_secs: 42,
        };
        assert_eq!(
            err.to_string(),
            "Hevy API rate limit exceeded, retry after 42 seconds"
        );
    }
}
