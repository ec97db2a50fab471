// ABOUTME: Model Context Protocol (MCP) implementation for the Hevy server
// ABOUTME: Protocol schema, request processing, shared resources, resource templates, and stdio transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// JSON-RPC method routing and tool-call error handling
pub mod mcp_request_processor;
/// Templated resources such as `greeting://{name}`
pub mod resource_templates;
/// Shared server state
pub mod resources;
/// MCP protocol message types
pub mod schema;
/// Line-delimited stdio transport
pub mod transport;

pub use mcp_request_processor::McpRequestProcessor;
pub use resources::ServerResources;
pub use transport::StdioTransport;
