// ABOUTME: Static catalog of every Hevy tool exposed over MCP
// ABOUTME: One declarative entry per tool; the registry is built from this table at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use hevy_core::constants::tools::{
    CREATE_ROUTINE_FOLDER, CREATE_WEBHOOK_SUBSCRIPTION, CREATE_WORKOUT,
    DELETE_WEBHOOK_SUBSCRIPTION, GET_EXERCISE_TEMPLATES, GET_EXERCISE_TEMPLATE_BY_ID,
    GET_ROUTINE_FOLDERS, GET_ROUTINE_FOLDER_BY_ID, GET_WEBHOOK_SUBSCRIPTION, GET_WORKOUTS,
    GET_WORKOUT_BY_ID, UPDATE_WORKOUT,
};

use crate::mcp::schema::JsonSchema;

use super::definition::{ToolCapabilities, ToolDefinition};
use super::implementations::{
    exercise_templates, pagination_schema, routine_folders, webhooks, workouts,
};

const LIST: ToolCapabilities = ToolCapabilities::READS_DATA.union(ToolCapabilities::PAGINATED);
const READ: ToolCapabilities = ToolCapabilities::READS_DATA;
const WRITE: ToolCapabilities = ToolCapabilities::WRITES_DATA;
const WRITE_NORMALIZED: ToolCapabilities =
    ToolCapabilities::WRITES_DATA.union(ToolCapabilities::NORMALIZES_INPUT);
const DELETE: ToolCapabilities = ToolCapabilities::DESTRUCTIVE;

/// Every built-in tool
pub static TOOL_CATALOG: &[ToolDefinition] = &[
    ToolDefinition {
        name: GET_WORKOUTS,
        title: "Get Workouts",
        description: "List all workouts",
        input_schema: pagination_schema,
        capabilities: LIST,
        handler: workouts::get_workouts,
    },
    ToolDefinition {
        name: GET_WORKOUT_BY_ID,
        title: "Get Workout By ID",
        description: "Get a workout by its ID",
        input_schema: workouts::workout_id_schema,
        capabilities: READ,
        handler: workouts::get_workout_by_id,
    },
    ToolDefinition {
        name: CREATE_WORKOUT,
        title: "Create Workout",
        description: "Create a new workout",
        input_schema: workouts::create_workout_schema,
        capabilities: WRITE_NORMALIZED,
        handler: workouts::create_workout,
    },
    ToolDefinition {
        name: UPDATE_WORKOUT,
        title: "Update Workout",
        description: "Update an existing workout",
        input_schema: workouts::update_workout_schema,
        capabilities: WRITE_NORMALIZED,
        handler: workouts::update_workout,
    },
    ToolDefinition {
        name: GET_ROUTINE_FOLDERS,
        title: "Get Routine Folders",
        description: "List all routine folders",
        input_schema: pagination_schema,
        capabilities: LIST,
        handler: routine_folders::get_routine_folders,
    },
    ToolDefinition {
        name: GET_ROUTINE_FOLDER_BY_ID,
        title: "Get Routine Folder By ID",
        description: "Get a routine folder by its ID",
        input_schema: routine_folders::folder_id_schema,
        capabilities: READ,
        handler: routine_folders::get_routine_folder_by_id,
    },
    ToolDefinition {
        name: CREATE_ROUTINE_FOLDER,
        title: "Create Routine Folder",
        description: "Create a new routine folder",
        input_schema: routine_folders::create_folder_schema,
        capabilities: WRITE,
        handler: routine_folders::create_routine_folder,
    },
    ToolDefinition {
        name: GET_EXERCISE_TEMPLATES,
        title: "Get Exercise Templates",
        description: "List all exercise templates",
        input_schema: pagination_schema,
        capabilities: LIST,
        handler: exercise_templates::get_exercise_templates,
    },
    ToolDefinition {
        name: GET_EXERCISE_TEMPLATE_BY_ID,
        title: "Get Exercise Template By ID",
        description: "Get an exercise template by its ID",
        input_schema: exercise_templates::template_id_schema,
        capabilities: READ,
        handler: exercise_templates::get_exercise_template_by_id,
    },
    ToolDefinition {
        name: GET_WEBHOOK_SUBSCRIPTION,
        title: "Get Webhook Subscription",
        description: "Get the current webhook subscription",
        input_schema: JsonSchema::empty,
        capabilities: READ,
        handler: webhooks::get_webhook_subscription,
    },
    ToolDefinition {
        name: CREATE_WEBHOOK_SUBSCRIPTION,
        title: "Create Webhook Subscription",
        description: "Create a new webhook subscription",
        input_schema: webhooks::create_webhook_schema,
        capabilities: WRITE,
        handler: webhooks::create_webhook_subscription,
    },
    ToolDefinition {
        name: DELETE_WEBHOOK_SUBSCRIPTION,
        title: "Delete Webhook Subscription",
        description: "Delete the current webhook subscription",
        input_schema: JsonSchema::empty,
        capabilities: DELETE,
        handler: webhooks::delete_webhook_subscription,
    },
];
