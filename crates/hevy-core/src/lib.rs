// ABOUTME: Core types and constants for the Hevy MCP server
// ABOUTME: Foundation crate with error handling, workout payload models, pagination, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Hevy Core
//!
//! Foundation crate providing shared types and constants for the Hevy MCP
//! server. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ClientError`
//! - **constants**: Protocol, tool name, and remote API constants
//! - **pagination**: Page/page-size parameters shared by list operations
//! - **models**: Workout, routine folder, and webhook payloads with field normalization

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Page-based pagination parameters for list operations
pub mod pagination;

/// Request payload models sent to the Hevy API
pub mod models;
