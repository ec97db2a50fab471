// ABOUTME: Main library entry point for the Hevy MCP server
// ABOUTME: Exposes the Hevy workout API to MCP clients as tools over line-delimited JSON-RPC on stdio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Hevy MCP Server
//!
//! A Model Context Protocol (MCP) server that lets LLM agents read and write
//! data in the Hevy workout tracker.
//!
//! ## Architecture
//!
//! - **Tools**: a static catalog of twelve tools, one per Hevy API operation,
//!   dispatched through [`tools::ToolRegistry`]
//! - **Normalization**: workout payloads are rewritten so every optional field
//!   is explicitly present before they are sent (see `hevy_core::models`)
//! - **MCP**: JSON-RPC request routing, the `greeting://{name}` resource, and
//!   the stdio transport
//! - **Config**: environment-driven settings, including `HEVY_API_KEY`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use hevy_client::{HevyClient, HevyClientConfig};
//! use hevy_mcp_server::config::environment::ServerConfig;
//! use hevy_mcp_server::mcp::{ServerResources, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let client = HevyClient::new(
//!         HevyClientConfig::new(config.hevy.api_key.clone())
//!             .with_base_url(config.hevy.base_url.clone()),
//!     );
//!     let resources = Arc::new(ServerResources::new(config, Arc::new(client)));
//!     StdioTransport::new(resources).run().await?;
//!     Ok(())
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Unified error handling (re-exported from `hevy-core`)
pub mod errors;

/// JSON-RPC 2.0 message types
pub mod jsonrpc;

/// Structured logging to stderr
pub mod logging;

/// MCP protocol handling and stdio transport
pub mod mcp;

/// Tool catalog, registry, and handlers
pub mod tools;
