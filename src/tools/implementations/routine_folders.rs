// ABOUTME: Routine folder tools: list, fetch by numeric id, and create
// ABOUTME: Folder creation sends only the title
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use futures_util::future::BoxFuture;
use hevy_core::constants::tools::{
    CREATE_ROUTINE_FOLDER, GET_ROUTINE_FOLDERS, GET_ROUTINE_FOLDER_BY_ID,
};
use hevy_core::models::RoutineFolderPayload;
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
struct FolderIdArgs {
    folder_id: i64,
}

/// `getRoutineFolders`
pub fn get_routine_folders(
    args: Value,
    context: &ToolExecutionContext,
) -> BoxFuture<'_, AppResult<ToolResult>> {
    Box::pin(async move {
        let page = parse_args::<PaginationArgs>(GET_ROUTINE_FOLDERS, args)?.resolve();
        let body = context.api().get_routine_folders(page).await?;
        ToolResult::json(&body)
    })
}

/// `getRoutineFolderById`
pub fn get_routine_folder_by_id(
    args: Value,
    context: &ToolExecutionContext,
) -> BoxFuture<'_, AppResult<ToolResult>> {
    Box::pin(async move {
        let params: FolderIdArgs = parse_args(GET_ROUTINE_FOLDER_BY_ID, args)?;
        let body = context
            .api()
            .get_routine_folder_by_id(params.folder_id)
            .await?;
        ToolResult::json(&body)
    })
}

/// `createRoutineFolder`
pub fn create_routine_folder(
    args: Value,
    context: &ToolExecutionContext,
) -> BoxFuture<'_, AppResult<ToolResult>> {
    Box::pin(async move {
        let folder: RoutineFolderPayload = parse_args(CREATE_ROUTINE_FOLDER, args)?;
        let body = context.api().create_routine_folder(&folder).await?;
        ToolResult::json(&body)
    })
}

/// Input schema for `getRoutineFolderById`
#[must_use]
pub fn folder_id_schema() -> JsonSchema {
    JsonSchema::empty().required(
        "folderId",
        PropertySchema::integer().describe("Routine folder ID"),
    )
}

/// Input schema for `createRoutineFolder`
#[must_use]
pub fn create_folder_schema() -> JsonSchema {
    JsonSchema::empty().required(
        "title",
        PropertySchema::string().describe("Folder title"),
    )
}
