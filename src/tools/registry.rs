// ABOUTME: Central registry for MCP tools with capability-based filtering and execution
// ABOUTME: Built from the static catalog; one execute() dispatches every tools/call by name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Registry
//!
//! Central registry for MCP tools, providing:
//! - Tool registration and lookup
//! - Capability-based filtering (read vs write tools)
//! - Schema generation for MCP tools/list responses
//! - A single dispatch point for tool execution
//!
//! # Example
//!
//! ```
//! use hevy_mcp_server::tools::registry::ToolRegistry;
//!
//! let registry = ToolRegistry::builtin();
//! assert_eq!(registry.len(), 12);
//! assert!(registry.contains("getWorkouts"));
//! ```

use std::collections::HashMap;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::AppResult;
use crate::mcp::schema::ToolSchema;

use super::catalog::TOOL_CATALOG;
use super::context::ToolExecutionContext;
use super::definition::{ToolCapabilities, ToolDefinition};
use super::errors::ToolError;
use super::result::ToolResult;

/// Central registry for MCP tools
///
/// Built once at startup and then used immutably for lookups, so it can be
/// shared across tasks behind an `Arc` without locking.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    /// Registered tools by name
    tools: HashMap<&'static str, &'static ToolDefinition>,
    /// Registration order, used for stable `tools/list` output
    order: Vec<&'static str>,
}

impl ToolRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every tool in the built-in catalog
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register_builtin_tools();
        registry
    }

    /// Register every tool in the built-in catalog
    pub fn register_builtin_tools(&mut self) {
        for definition in TOOL_CATALOG {
            self.register(definition);
        }
        info!(
            "Registered {} built-in tools ({} read, {} write)",
            self.len(),
            self.read_tools().len(),
            self.write_tools().len()
        );
    }

    /// Register a tool in the registry
    ///
    /// # Returns
    ///
    /// `true` if the tool was registered, `false` if a tool with the same name exists
    pub fn register(&mut self, definition: &'static ToolDefinition) -> bool {
        if self.tools.contains_key(definition.name) {
            warn!("Tool '{}' is already registered, skipping", definition.name);
            return false;
        }

        debug!(
            "Registering tool '{}' with capabilities: {}",
            definition.name,
            definition.capabilities.describe()
        );
        self.tools.insert(definition.name, definition);
        self.order.push(definition.name);
        true
    }

    /// Get a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static ToolDefinition> {
        self.tools.get(name).copied()
    }

    /// Check if a tool is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get the number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// List all tool names in registration order
    #[must_use]
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.order.clone()
    }

    /// Tool schemas for `tools/list`, in registration order
    #[must_use]
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|definition| definition.schema())
            .collect()
    }

    /// Filter tools by capabilities
    #[must_use]
    pub fn filter_by_capabilities(&self, required: ToolCapabilities) -> Vec<&'static str> {
        self.order
            .iter()
            .copied()
            .filter(|name| {
                self.tools
                    .get(name)
                    .is_some_and(|definition| definition.capabilities.contains(required))
            })
            .collect()
    }

    /// Get tools that only read data
    #[must_use]
    pub fn read_tools(&self) -> Vec<&'static str> {
        self.filter_by_capabilities(ToolCapabilities::READS_DATA)
    }

    /// Get tools that write data
    #[must_use]
    pub fn write_tools(&self) -> Vec<&'static str> {
        self.filter_by_capabilities(ToolCapabilities::WRITES_DATA)
    }

    /// Execute a tool by name
    ///
    /// # Errors
    ///
    /// Returns `AppError` if:
    /// - Tool is not found
    /// - Arguments fail validation
    /// - The remote API call fails
    pub async fn execute(
        &self,
        name: &str,
        args: Value,
        context: &ToolExecutionContext,
    ) -> AppResult<ToolResult> {
        let definition = self.get(name).ok_or_else(|| ToolError::not_found(name))?;

        let start = Instant::now();
        let result = definition.invoke(args, context).await;
        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &result {
            Ok(_) => info!(
                mcp.tool = name,
                mcp.success = true,
                mcp.duration_ms = duration_ms,
                "Tool call completed"
            ),
            Err(error) => warn!(
                mcp.tool = name,
                mcp.success = false,
                mcp.duration_ms = duration_ms,
                error.code = ?error.code,
                error.external = error.code.is_external(),
                error.retryable = error.is_retryable(),
                "Tool call failed: {}",
                error.message
            ),
        }

        result
    }
}
