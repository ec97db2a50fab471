// ABOUTME: Declarative tool definitions: name, title, description, input schema, capabilities, handler
// ABOUTME: ToolCapabilities bitflags drive MCP annotations and registry filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Definitions
//!
//! A tool is plain data: a [`ToolDefinition`] holds its metadata and a
//! function pointer to its handler. The whole catalog is a `static` slice and
//! dispatch is a lookup followed by a call through that pointer.

use std::fmt;

use bitflags::bitflags;
use futures_util::future::BoxFuture;
use serde_json::Value;

use crate::errors::AppResult;
use crate::mcp::schema::{JsonSchema, ToolAnnotations, ToolSchema};

use super::args::first_missing_field;
use super::context::ToolExecutionContext;
use super::errors::ToolError;
use super::result::ToolResult;

bitflags! {
    /// Capabilities that tools declare for filtering and client hints
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ToolCapabilities: u8 {
        /// Tool reads remote data
        const READS_DATA = 0b0000_0001;
        /// Tool creates or modifies remote data
        const WRITES_DATA = 0b0000_0010;
        /// Tool removes remote data
        const DESTRUCTIVE = 0b0000_0100;
        /// Tool normalizes its payload before sending it
        const NORMALIZES_INPUT = 0b0000_1000;
        /// Tool accepts page/pageSize arguments
        const PAGINATED = 0b0001_0000;
    }
}

impl ToolCapabilities {
    /// Check if tool reads data
    #[must_use]
    pub const fn reads_data(self) -> bool {
        self.contains(Self::READS_DATA)
    }

    /// Check if tool writes data
    #[must_use]
    pub const fn writes_data(self) -> bool {
        self.contains(Self::WRITES_DATA)
    }

    /// Check if tool removes data
    #[must_use]
    pub const fn is_destructive(self) -> bool {
        self.contains(Self::DESTRUCTIVE)
    }

    /// Client-facing hints derived from the flags
    #[must_use]
    pub const fn annotations(self) -> ToolAnnotations {
        ToolAnnotations {
            read_only_hint: !self.intersects(Self::WRITES_DATA.union(Self::DESTRUCTIVE)),
            destructive_hint: self.is_destructive(),
        }
    }

    /// Get a description of all enabled capabilities for logging
    #[must_use]
    pub fn describe(&self) -> String {
        let parts: Vec<&str> = self
            .iter_names()
            .map(|(name, _)| name)
            .collect();

        if parts.is_empty() {
            "none".to_owned()
        } else {
            parts.join(", ").to_lowercase()
        }
    }
}

/// Async tool handler: parses arguments, calls the API, renders the result
pub type ToolHandler =
    for<'a> fn(Value, &'a ToolExecutionContext) -> BoxFuture<'a, AppResult<ToolResult>>;

/// One entry of the tool catalog
pub struct ToolDefinition {
    /// Unique tool name used in `tools/call`
    pub name: &'static str,
    /// Display title
    pub title: &'static str,
    /// What the tool does
    pub description: &'static str,
    /// Builds the JSON Schema of the arguments object
    pub input_schema: fn() -> JsonSchema,
    /// Behavioral flags
    pub capabilities: ToolCapabilities,
    /// Handler invoked by the registry
    pub handler: ToolHandler,
}

impl ToolDefinition {
    /// Schema entry for `tools/list`
    #[must_use]
    pub fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name.to_owned(),
            title: self.title.to_owned(),
            description: self.description.to_owned(),
            input_schema: (self.input_schema)(),
            annotations: self.capabilities.annotations(),
        }
    }

    /// Check required arguments against the input schema, then run the handler
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` naming the path of the first absent
    /// required field; propagates validation, serialization, and remote API
    /// errors from the handler unchanged
    pub async fn invoke(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult> {
        if let Some(path) = first_missing_field(&(self.input_schema)(), &args) {
            return Err(ToolError::missing_parameter(self.name, path).into());
        }
        (self.handler)(args, context).await
    }
}

impl fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("title", &self.title)
            .field("capabilities", &self.capabilities)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_only_annotations() {
        let hints = ToolCapabilities::READS_DATA.annotations();
        assert!(hints.read_only_hint);
        assert!(!hints.destructive_hint);
    }

    #[test]
    fn test_destructive_annotations() {
        let hints = ToolCapabilities::DESTRUCTIVE.annotations();
        assert!(!hints.read_only_hint);
        assert!(hints.destructive_hint);
    }

    #[test]
    fn test_describe_lists_flags() {
        let caps = ToolCapabilities::WRITES_DATA.union(ToolCapabilities::NORMALIZES_INPUT);
        assert_eq!(caps.describe(), "writes_data, normalizes_input");
        assert_eq!(ToolCapabilities::empty().describe(), "none");
    }
}
