// ABOUTME: Defines ToolResult, the content returned by a tool handler
// ABOUTME: Builds text content items and converts them into the MCP tools/call response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Result Types
//!
//! Every tool in this server answers with a single text item: either a
//! confirmation message or the remote response pretty-printed as JSON.

use serde_json::Value;

use crate::errors::{AppError, AppResult};
use crate::mcp::schema::{Content, ToolResponse};

/// Result returned by tool execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResult {
    /// Content items returned to the client
    pub content: Vec<Content>,
    /// Whether this result represents a failed execution
    pub is_error: bool,
}

impl ToolResult {
    /// A successful result with one text item
    #[must_use]
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text {
                text: message.into(),
            }],
            is_error: false,
        }
    }

    /// A successful result with `value` pretty-printed using 2-space indentation
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the value cannot be rendered
    pub fn json(value: &Value) -> AppResult<Self> {
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| AppError::serialization("tool result", e))?;
        Ok(Self::text(text))
    }

    /// A failed result carrying the error message as text
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            is_error: true,
            ..Self::text(message)
        }
    }

    /// Text of the first content item
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().and_then(Content::as_text)
    }
}

impl From<ToolResult> for ToolResponse {
    fn from(result: ToolResult) -> Self {
        Self {
            content: result.content,
            is_error: result.is_error,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_json_uses_two_space_indent() {
        let result = ToolResult::json(&json!({"id": "w1"})).unwrap();
        assert_eq!(result.first_text(), Some("{\n  \"id\": \"w1\"\n}"));
        assert!(!result.is_error);
    }

    #[test]
    fn test_json_null_renders_null() {
        let result = ToolResult::json(&Value::Null).unwrap();
        assert_eq!(result.first_text(), Some("null"));
    }

    #[test]
    fn test_error_result_is_flagged() {
        let response: ToolResponse = ToolResult::error("boom").into();
        assert!(response.is_error);
        assert_eq!(response.content.len(), 1);
    }
}
