// ABOUTME: Tool-specific error types for catalog lookup and argument validation
// ABOUTME: Converts into AppError so every tool failure flows through the unified error system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Error Types
//!
//! Errors raised before a tool reaches the remote API: unknown tool names and
//! arguments that do not match the tool's input schema.

use std::error::Error;
use std::fmt;

use crate::errors::{AppError, ErrorCode};

/// Errors specific to tool operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// Tool was not found in the registry
    NotFound {
        /// Name of the requested tool
        tool_name: String,
    },
    /// A parameter has the wrong type or value
    InvalidParameter {
        /// Name of the tool
        tool_name: String,
        /// Name of the invalid parameter, or `arguments` for the whole object
        parameter: String,
        /// Reason the parameter is invalid
        reason: String,
    },
    /// Required parameter is missing
    MissingParameter {
        /// Name of the tool
        tool_name: String,
        /// Name of the missing parameter
        parameter: String,
    },
}

impl ToolError {
    /// Create a "not found" error
    #[must_use]
    pub fn not_found(tool_name: impl Into<String>) -> Self {
        Self::NotFound {
            tool_name: tool_name.into(),
        }
    }

    /// Create an "invalid parameter" error
    #[must_use]
    pub fn invalid_parameter(
        tool_name: impl Into<String>,
        parameter: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            tool_name: tool_name.into(),
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Create a "missing parameter" error
    #[must_use]
    pub fn missing_parameter(tool_name: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::MissingParameter {
            tool_name: tool_name.into(),
            parameter: parameter.into(),
        }
    }

    /// Get the tool name associated with this error
    #[must_use]
    pub fn tool_name(&self) -> &str {
        match self {
            Self::NotFound { tool_name }
            | Self::InvalidParameter { tool_name, .. }
            | Self::MissingParameter { tool_name, .. } => tool_name,
        }
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { tool_name } => {
                write!(f, "Tool '{tool_name}' not found")
            }
            Self::InvalidParameter {
                tool_name,
                parameter,
                reason,
            } => {
                write!(
                    f,
                    "Invalid parameter '{parameter}' for tool '{tool_name}': {reason}"
                )
            }
            Self::MissingParameter {
                tool_name,
                parameter,
            } => {
                write!(
                    f,
                    "Missing required parameter '{parameter}' for tool '{tool_name}'"
                )
            }
        }
    }
}

impl Error for ToolError {}

impl From<ToolError> for AppError {
    fn from(error: ToolError) -> Self {
        let code = match error {
            ToolError::NotFound { .. } => ErrorCode::ToolNotFound,
            ToolError::InvalidParameter { .. } => ErrorCode::InvalidInput,
            ToolError::MissingParameter { .. } => ErrorCode::MissingRequiredField,
        };
        Self::new(code, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_invalid_params() {
        let error: AppError = ToolError::not_found("getLunch").into();
        assert_eq!(error.code, ErrorCode::ToolNotFound);
        assert_eq!(error.jsonrpc_code(), -32602);
        assert_eq!(error.message, "Tool 'getLunch' not found");
    }

    #[test]
    fn test_missing_parameter_message() {
        let error = ToolError::missing_parameter("getWorkoutById", "workoutId");
        assert_eq!(error.tool_name(), "getWorkoutById");
        let app: AppError = error.into();
        assert_eq!(app.code, ErrorCode::MissingRequiredField);
        assert_eq!(
            app.message,
            "Missing required parameter 'workoutId' for tool 'getWorkoutById'"
        );
    }
}
