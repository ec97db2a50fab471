// ABOUTME: Hevy public API client behind the narrow HevyApi capability trait
// ABOUTME: Owns HTTP transport, the api-key header, request envelopes, and status-to-error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Hevy Client
//!
//! [`HevyApi`] is the only surface the tool layer sees. [`HevyClient`] is the
//! reqwest-backed implementation; tests substitute their own.

/// The `HevyApi` capability trait
pub mod api;
/// reqwest-backed `HevyApi` implementation
pub mod client;
/// Shared HTTP client for Hevy API calls
pub mod http_client;

pub use api::HevyApi;
pub use client::{HevyClient, HevyClientConfig};
pub use hevy_core::errors::{ClientError, ClientResult};
pub use http_client::{initialize_shared_client, shared_client};
