// ABOUTME: MCP protocol constants for version and server identification
// ABOUTME: Pure compile-time constants without runtime configuration dependencies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Protocol constants for MCP and JSON-RPC
//!
//! Runtime-configurable values (server name, negotiated MCP version) live in
//! the server's `ServerConfig`; these are the compile-time defaults.

/// JSON-RPC version (standard, not configurable)
pub const JSONRPC_VERSION: &str = "2.0";

/// Default MCP protocol version advertised in `initialize`
pub const DEFAULT_MCP_PROTOCOL_VERSION: &str = "2025-06-18";

/// Default server name advertised in `initialize`
pub const DEFAULT_SERVER_NAME: &str = "hevy-mcp";

/// Server version from Cargo.toml
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// URI template of the greeting resource
pub const GREETING_URI_TEMPLATE: &str = "greeting://{name}";

/// URI scheme prefix of the greeting resource
pub const GREETING_URI_PREFIX: &str = "greeting://";

/// Longest request body echoed into debug logs before truncation
pub const MAX_LOGGED_REQUEST_CHARS: usize = 1_000;
