// ABOUTME: Defines ToolExecutionContext, the per-call handle tools use to reach the Hevy API
// ABOUTME: Carries the shared API client and the JSON-RPC request id for log correlation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::sync::Arc;

use hevy_client::HevyApi;
use serde_json::Value;

/// Context provided to every tool execution
///
/// Cloning is cheap; the API client is shared behind an `Arc` and is
/// read-only after start-up.
#[derive(Clone)]
pub struct ToolExecutionContext {
    api: Arc<dyn HevyApi>,
    /// Request ID for tracing/logging
    pub request_id: Option<Value>,
}

impl ToolExecutionContext {
    /// Create a context around a shared API client
    #[must_use]
    pub fn new(api: Arc<dyn HevyApi>) -> Self {
        Self {
            api,
            request_id: None,
        }
    }

    /// Set request ID
    #[must_use]
    pub fn with_request_id(mut self, request_id: Option<Value>) -> Self {
        self.request_id = request_id;
        self
    }

    /// The remote API client
    #[must_use]
    pub fn api(&self) -> &dyn HevyApi {
        self.api.as_ref()
    }
}

impl fmt::Debug for ToolExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolExecutionContext")
            .field("request_id", &self.request_id)
            .finish_non_exhaustive()
    }
}
