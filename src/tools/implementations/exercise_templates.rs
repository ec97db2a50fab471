// ABOUTME: Exercise template tools: list and fetch by id
// ABOUTME: Read-only access to the Hevy exercise library
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use futures_util::future::BoxFuture;
use hevy_core::constants::tools::{GET_EXERCISE_TEMPLATES, GET_EXERCISE_TEMPLATE_BY_ID};
use hevy_core::pagination::PaginationArgs;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppResult;
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::tools::args::parse_args;
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TemplateIdArgs {
    exercise_template_id: String,
}

/// `getExerciseTemplates`
pub fn get_exercise_templates(
    args: Value,
    context: &ToolExecutionContext,
) -> BoxFuture<'_, AppResult<ToolResult>> {
    Box::pin(async move {
        let page = parse_args::<PaginationArgs>(GET_EXERCISE_TEMPLATES, args)?.resolve();
        let body = context.api().get_exercise_templates(page).await?;
        ToolResult::json(&body)
    })
}

/// `getExerciseTemplateById`
pub fn get_exercise_template_by_id(
    args: Value,
    context: &ToolExecutionContext,
) -> BoxFuture<'_, AppResult<ToolResult>> {
    Box::pin(async move {
        let params: TemplateIdArgs = parse_args(GET_EXERCISE_TEMPLATE_BY_ID, args)?;
        let body = context
            .api()
            .get_exercise_template_by_id(&params.exercise_template_id)
            .await?;
        ToolResult::json(&body)
    })
}

/// Input schema for `getExerciseTemplateById`
#[must_use]
pub fn template_id_schema() -> JsonSchema {
    JsonSchema::empty().required(
        "exerciseTemplateId",
        PropertySchema::string().describe("Exercise template ID"),
    )
}
