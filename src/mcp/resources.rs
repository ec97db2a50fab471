// ABOUTME: Centralized resource container shared by every request the MCP server handles
// ABOUTME: Holds the server configuration, the Hevy API client, and the tool registry behind Arcs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources Module
//!
//! Everything here is built once at start-up and only read afterwards, so
//! cloning the container is a handful of reference-count bumps.

use std::fmt;
use std::sync::Arc;

use hevy_client::HevyApi;

use crate::config::environment::ServerConfig;
use crate::tools::{ToolExecutionContext, ToolRegistry};

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Hevy REST client
    pub api: Arc<dyn HevyApi>,
    /// Every tool the server exposes
    pub tools: Arc<ToolRegistry>,
}

impl ServerResources {
    /// Create resources with the built-in tool catalog
    #[must_use]
    pub fn new(config: ServerConfig, api: Arc<dyn HevyApi>) -> Self {
        Self::with_registry(config, api, ToolRegistry::builtin())
    }

    /// Create resources with a caller-supplied registry
    #[must_use]
    pub fn with_registry(config: ServerConfig, api: Arc<dyn HevyApi>, tools: ToolRegistry) -> Self {
        Self {
            config: Arc::new(config),
            api,
            tools: Arc::new(tools),
        }
    }

    /// Execution context for one `tools/call`
    #[must_use]
    pub fn tool_context(&self, request_id: Option<serde_json::Value>) -> ToolExecutionContext {
        ToolExecutionContext::new(Arc::clone(&self.api)).with_request_id(request_id)
    }
}

impl fmt::Debug for ServerResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerResources")
            .field("config", &self.config)
            .field("tools", &self.tools.len())
            .finish_non_exhaustive()
    }
}
