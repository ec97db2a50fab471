// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Exports the recording MockHevyApi and server-resource builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod mock_api;

use std::sync::Arc;

use hevy_mcp_server::config::environment::ServerConfig;
use hevy_mcp_server::mcp::ServerResources;
use hevy_mcp_server::tools::ToolExecutionContext;

use mock_api::MockHevyApi;

/// Server resources backed by `api` with default configuration
pub fn resources_with(api: &Arc<MockHevyApi>) -> Arc<ServerResources> {
    let api: Arc<MockHevyApi> = Arc::clone(api);
    Arc::new(ServerResources::new(ServerConfig::default(), api))
}

/// Tool execution context backed by `api`
pub fn context_with(api: &Arc<MockHevyApi>) -> ToolExecutionContext {
    let api: Arc<MockHevyApi> = Arc::clone(api);
    ToolExecutionContext::new(api)
}
