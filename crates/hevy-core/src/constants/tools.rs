// ABOUTME: Tool identifiers exposed through MCP tools/list and tools/call
// ABOUTME: One constant per catalog entry so handlers, tests, and the registry agree on names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Workouts
/// List workouts
pub const GET_WORKOUTS: &str = "getWorkouts";
/// Fetch one workout
pub const GET_WORKOUT_BY_ID: &str = "getWorkoutById";
/// Create a workout
pub const CREATE_WORKOUT: &str = "createWorkout";
/// Replace a workout
pub const UPDATE_WORKOUT: &str = "updateWorkout";

// Routine folders
/// List routine folders
pub const GET_ROUTINE_FOLDERS: &str = "getRoutineFolders";
/// Fetch one routine folder
pub const GET_ROUTINE_FOLDER_BY_ID: &str = "getRoutineFolderById";
/// Create a routine folder
pub const CREATE_ROUTINE_FOLDER: &str = "createRoutineFolder";

// Exercise templates
/// List exercise templates
pub const GET_EXERCISE_TEMPLATES: &str = "getExerciseTemplates";
/// Fetch one exercise template
pub const GET_EXERCISE_TEMPLATE_BY_ID: &str = "getExerciseTemplateById";

// Webhooks
/// Fetch the webhook subscription
pub const GET_WEBHOOK_SUBSCRIPTION: &str = "getWebhookSubscription";
/// Create the webhook subscription
pub const CREATE_WEBHOOK_SUBSCRIPTION: &str = "createWebhookSubscription";
/// Delete the webhook subscription
pub const DELETE_WEBHOOK_SUBSCRIPTION: &str = "deleteWebhookSubscription";

/// Every tool name, in catalog order
pub const ALL_TOOLS: [&str; 12] = [
    GET_WORKOUTS,
    GET_WORKOUT_BY_ID,
    CREATE_WORKOUT,
    UPDATE_WORKOUT,
    GET_ROUTINE_FOLDERS,
    GET_ROUTINE_FOLDER_BY_ID,
    CREATE_ROUTINE_FOLDER,
    GET_EXERCISE_TEMPLATES,
    GET_EXERCISE_TEMPLATE_BY_ID,
    GET_WEBHOOK_SUBSCRIPTION,
    CREATE_WEBHOOK_SUBSCRIPTION,
    DELETE_WEBHOOK_SUBSCRIPTION,
];

/// Text returned by `deleteWebhookSubscription` on success
pub const WEBHOOK_DELETED_MESSAGE: &str = "Webhook subscription deleted";
