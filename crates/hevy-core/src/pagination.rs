// ABOUTME: Page-number pagination shared by every Hevy list endpoint
// ABOUTME: Resolves optional page/pageSize tool arguments to the defaults sent upstream
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Page requested when the caller omits `page`
pub const DEFAULT_PAGE: u32 = 1;

/// Page size requested when the caller omits `pageSize`
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Optional pagination arguments as they arrive from a tool call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationArgs {
    /// Requested page, 1-based
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Requested page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl PaginationArgs {
    /// Resolve to concrete parameters, filling in defaults
    #[must_use]
    pub fn resolve(self) -> PageParams {
        PageParams::from_optional(self.page, self.page_size)
    }
}

/// Concrete pagination parameters sent to the remote API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    /// Page number, 1-based
    pub page: u32,
    /// Number of items per page
    pub page_size: u32,
}

impl PageParams {
    /// Create explicit pagination parameters
    #[must_use]
    pub const fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Build from optional values, substituting [`DEFAULT_PAGE`] and [`DEFAULT_PAGE_SIZE`]
    #[must_use]
    pub fn from_optional(page: Option<u32>, page_size: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE),
            page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    /// Query string pairs in the order the API documents them
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            (crate::constants::api::query::PAGE, self.page.to_string()),
            (
                crate::constants::api::query::PAGE_SIZE,
                self.page_size.to_string(),
            ),
        ]
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}

impl Display for PageParams {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "page={} pageSize={}", self.page, self.page_size)
    }
}
