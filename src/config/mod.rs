// ABOUTME: Configuration module for the Hevy MCP server
// ABOUTME: Re-exports the environment-driven ServerConfig and its Hevy API settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment and server configuration
pub mod environment;

pub use environment::{load_dotenv, Environment, HevyApiConfig, ServerConfig};
