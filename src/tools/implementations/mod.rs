// ABOUTME: Tool handlers grouped by Hevy resource: workouts, routine folders, exercise templates, webhooks
// ABOUTME: Shared input-schema helpers for paginated list tools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Exercise template tools
pub mod exercise_templates;
/// Routine folder tools
pub mod routine_folders;
/// Webhook subscription tools
pub mod webhooks;
/// Workout tools
pub mod workouts;

use crate::mcp::schema::{JsonSchema, PropertySchema};

/// Input schema shared by every list tool
#[must_use]
pub fn pagination_schema() -> JsonSchema {
    JsonSchema::empty()
        .optional(
            "page",
            PropertySchema::integer().describe("Page number, starting at 1 (default 1)"),
        )
        .optional(
            "pageSize",
            PropertySchema::integer().describe("Items per page (default 10)"),
        )
}
