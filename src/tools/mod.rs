// ABOUTME: Tool layer: declarative catalog, registry dispatch, argument parsing, and handlers
// ABOUTME: Turns a tools/call name plus arguments into a Hevy API call and a text result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Hevy Tools
//!
//! Data flow for one invocation: the registry selects a [`ToolDefinition`] by
//! name, the handler parses and normalizes its arguments, calls the
//! [`hevy_client::HevyApi`] capability, and renders the response as text.

/// Typed argument parsing
pub mod args;
/// Static tool catalog
pub mod catalog;
/// Per-call execution context
pub mod context;
/// Tool definitions and capability flags
pub mod definition;
/// Tool-specific errors
pub mod errors;
/// Tool handlers by resource
pub mod implementations;
/// Tool registry and dispatch
pub mod registry;
/// Tool result type
pub mod result;

pub use catalog::TOOL_CATALOG;
pub use context::ToolExecutionContext;
pub use definition::{ToolCapabilities, ToolDefinition, ToolHandler};
pub use errors::ToolError;
pub use registry::ToolRegistry;
pub use result::ToolResult;
