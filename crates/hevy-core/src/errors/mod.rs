// ABOUTME: Unified error handling with standard error codes and JSON-RPC mapping
// ABOUTME: Defines AppError, ErrorCode, and the AppResult alias used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Centralized error types for the Hevy MCP server. Every fallible operation
//! in the workspace returns [`AppResult`], and every error carries an
//! [`ErrorCode`] that decides how it is surfaced to the MCP client.

use std::error::Error;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the Hevy API client
pub mod client;

pub use client::{ClientError, ClientResult};

/// JSON-RPC error codes used when surfacing an `AppError` to a client
pub mod jsonrpc_codes {
    /// Invalid JSON was received
    pub const PARSE_ERROR: i32 = -32700;
    /// The JSON sent is not a valid request object
    pub const INVALID_REQUEST: i32 = -32600;
    /// The method does not exist
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid method parameters
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal JSON-RPC error
    pub const INTERNAL_ERROR: i32 = -32603;
    /// Implementation-defined server error (remote service failures)
    pub const SERVER_ERROR: i32 = -32000;
    /// MCP resource not found
    pub const RESOURCE_NOT_FOUND: i32 = -32002;
}

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation
    /// The provided input is invalid
    InvalidInput,
    /// A required field is missing
    MissingRequiredField,

    // Lookup
    /// Requested tool does not exist in the catalog
    ToolNotFound,
    /// Requested resource does not exist
    ResourceNotFound,
    /// Requested protocol method does not exist
    MethodNotFound,

    // External service (Hevy API)
    /// The Hevy API returned an error
    ExternalServiceError,
    /// The Hevy API could not be reached
    ExternalServiceUnavailable,
    /// The Hevy API rejected our credentials
    ExternalAuthFailed,
    /// The Hevy API rate limit was hit
    ExternalRateLimited,
    /// The Hevy API does not know the requested entity
    ExternalNotFound,

    // Internal
    /// Unexpected internal failure
    InternalError,
    /// Data serialization/deserialization failed
    SerializationError,
}

impl ErrorCode {
    /// JSON-RPC error code used when this error is reported as a protocol error
    #[must_use]
    pub const fn jsonrpc_code(self) -> i32 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField | Self::ToolNotFound => {
                jsonrpc_codes::INVALID_PARAMS
            }
            Self::ResourceNotFound => jsonrpc_codes::RESOURCE_NOT_FOUND,
            Self::MethodNotFound => jsonrpc_codes::METHOD_NOT_FOUND,
            Self::ExternalServiceError
            | Self::ExternalServiceUnavailable
            | Self::ExternalAuthFailed
            | Self::ExternalRateLimited
            | Self::ExternalNotFound => jsonrpc_codes::SERVER_ERROR,
            Self::InternalError | Self::SerializationError => jsonrpc_codes::INTERNAL_ERROR,
        }
    }

    /// Whether the error was caused by the caller's request rather than by execution
    ///
    /// Request errors are reported as protocol errors; everything else is
    /// reported as a failed tool result.
    #[must_use]
    pub const fn is_request_error(self) -> bool {
        matches!(
            self,
            Self::InvalidInput
                | Self::MissingRequiredField
                | Self::ToolNotFound
                | Self::ResourceNotFound
                | Self::MethodNotFound
        )
    }

    /// Whether the error originated in the remote Hevy API
    #[must_use]
    pub const fn is_external(self) -> bool {
        matches!(
            self,
            Self::ExternalServiceError
                | Self::ExternalServiceUnavailable
                | Self::ExternalAuthFailed
                | Self::ExternalRateLimited
                | Self::ExternalNotFound
        )
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::ToolNotFound => "The requested tool was not found",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::MethodNotFound => "The requested method was not found",
            Self::ExternalServiceError => "The Hevy API returned an error",
            Self::ExternalServiceUnavailable => "The Hevy API is currently unavailable",
            Self::ExternalAuthFailed => "Authentication with the Hevy API failed",
            Self::ExternalRateLimited => "Hevy API rate limit exceeded",
            Self::ExternalNotFound => "The Hevy API could not find the requested entity",
            Self::InternalError => "An internal server error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {message}", .code.description())]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Protocol method not found
    #[must_use]
    pub fn method_not_found(method: &str) -> Self {
        Self::new(ErrorCode::MethodNotFound, format!("Unknown method: {method}"))
    }

    /// Internal server error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Serialization failure
    #[must_use]
    pub fn serialization(context: &str, error: serde_json::Error) -> Self {
        Self::new(
            ErrorCode::SerializationError,
            format!("Failed to serialize {context}: {error}"),
        )
        .with_source(error)
    }

    /// JSON-RPC error code for this error
    #[must_use]
    pub const fn jsonrpc_code(&self) -> i32 {
        self.code.jsonrpc_code()
    }

    /// Whether the Hevy API failure behind this error may succeed if repeated
    ///
    /// `false` for every error that did not come from [`ClientError`].
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        self.source
            .as_deref()
            .and_then(|source| source.downcast_ref::<ClientError>())
            .is_some_and(ClientError::is_retryable)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization("JSON value", error)
    }
}
