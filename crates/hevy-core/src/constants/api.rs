// ABOUTME: Hevy public API constants: base URL, authentication header, endpoint paths
// ABOUTME: Shared by the HTTP client and its wiremock-based tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Production base URL of the Hevy API
pub const DEFAULT_BASE_URL: &str = "https://api.hevyapp.com";

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "api-key";

/// Default overall HTTP request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default TCP connect timeout
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Fallback wait when a 429 carries no usable `Retry-After`
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Endpoint paths relative to the base URL
pub mod paths {
    /// Workouts collection
    pub const WORKOUTS: &str = "/v1/workouts";
    /// Routine folders collection
    pub const ROUTINE_FOLDERS: &str = "/v1/routine_folders";
    /// Exercise templates collection
    pub const EXERCISE_TEMPLATES: &str = "/v1/exercise_templates";
    /// Singleton webhook subscription
    pub const WEBHOOK_SUBSCRIPTION: &str = "/v1/webhook-subscription";
}

/// Query parameter names for list endpoints
pub mod query {
    /// 1-based page number
    pub const PAGE: &str = "page";
    /// Items per page
    pub const PAGE_SIZE: &str = "pageSize";
}
