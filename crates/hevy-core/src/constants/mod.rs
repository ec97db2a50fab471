// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for the MCP protocol, tool identifiers, and the Hevy API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Hevy remote API endpoints, headers, and defaults
pub mod api;
/// Protocol-specific constants for MCP and JSON-RPC
pub mod protocol;
/// Tool identifiers
pub mod tools;

/// Tool-related constants re-export
pub use tools::*;
