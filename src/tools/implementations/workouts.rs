// ABOUTME: Workout tools: list, fetch by id, create, and update
// ABOUTME: Create and update normalize the workout payload before it reaches the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use futures_util::future::BoxFuture;
use hevy_core::constants::tools::{
    CREATE_WORKOUT, GET_WORKOUTS, GET_WORKOUT_BY_ID, UPDATE_WORKOUT,
};
use hevy_core::models::WorkoutPayload;
use hevy_core::pagination::PaginationArgs;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::AppResult;
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::tools::args::parse_args;
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkoutIdArgs {
    workout_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateWorkoutArgs {
    workout_id: String,
    workout: WorkoutPayload,
}

/// `getWorkouts`
pub fn get_workouts(
    args: Value,
    context: &ToolExecutionContext,
) -> BoxFuture<'_, AppResult<ToolResult>> {
    Box::pin(async move {
        let page = parse_args::<PaginationArgs>(GET_WORKOUTS, args)?.resolve();
        let body = context.api().get_workouts(page).await?;
        ToolResult::json(&body)
    })
}

/// `getWorkoutById`
pub fn get_workout_by_id(
    args: Value,
    context: &ToolExecutionContext,
) -> BoxFuture<'_, AppResult<ToolResult>> {
    Box::pin(async move {
        let params: WorkoutIdArgs = parse_args(GET_WORKOUT_BY_ID, args)?;
        let body = context.api().get_workout_by_id(&params.workout_id).await?;
        ToolResult::json(&body)
    })
}

/// `createWorkout`
pub fn create_workout(
    args: Value,
    context: &ToolExecutionContext,
) -> BoxFuture<'_, AppResult<ToolResult>> {
    Box::pin(async move {
        let workout: WorkoutPayload = parse_args(CREATE_WORKOUT, args)?;
        let normalized = workout.normalized();
        debug!(
            exercises = normalized.exercises.len(),
            "Creating workout"
        );
        let body = context.api().create_workout(&normalized).await?;
        ToolResult::json(&body)
    })
}

/// `updateWorkout`
pub fn update_workout(
    args: Value,
    context: &ToolExecutionContext,
) -> BoxFuture<'_, AppResult<ToolResult>> {
    Box::pin(async move {
        let params: UpdateWorkoutArgs = parse_args(UPDATE_WORKOUT, args)?;
        let normalized = params.workout.normalized();
        debug!(
            workout_id = %params.workout_id,
            exercises = normalized.exercises.len(),
            "Updating workout"
        );
        let body = context
            .api()
            .update_workout(&params.workout_id, &normalized)
            .await?;
        ToolResult::json(&body)
    })
}

/// Input schema for `getWorkoutById`
#[must_use]
pub fn workout_id_schema() -> JsonSchema {
    JsonSchema::empty().required(
        "workoutId",
        PropertySchema::string().describe("Workout ID"),
    )
}

/// Input schema for `createWorkout`: the workout fields at top level
#[must_use]
pub fn create_workout_schema() -> JsonSchema {
    workout_payload_schema()
}

/// Input schema for `updateWorkout`
#[must_use]
pub fn update_workout_schema() -> JsonSchema {
    JsonSchema::empty()
        .required(
            "workoutId",
            PropertySchema::string().describe("Workout ID"),
        )
        .required(
            "workout",
            workout_payload_schema()
                .into_property()
                .describe("Replacement workout"),
        )
}

fn workout_payload_schema() -> JsonSchema {
    JsonSchema::empty()
        .required("title", PropertySchema::string())
        .required("description", PropertySchema::string())
        .required(
            "start_time",
            PropertySchema::string().describe("ISO-8601 start timestamp"),
        )
        .required(
            "end_time",
            PropertySchema::string().describe("ISO-8601 end timestamp"),
        )
        .required("is_private", PropertySchema::boolean())
        .required(
            "exercises",
            PropertySchema::array(exercise_schema().into_property()),
        )
}

fn exercise_schema() -> JsonSchema {
    JsonSchema::empty()
        .required("exercise_template_id", PropertySchema::string())
        .optional("superset_id", PropertySchema::number().nullable())
        .required("notes", PropertySchema::string())
        .required("sets", PropertySchema::array(set_schema().into_property()))
}

fn set_schema() -> JsonSchema {
    JsonSchema::empty()
        .required(
            "type",
            PropertySchema::string().describe("Set type, e.g. normal, warmup, dropset, failure"),
        )
        .optional("weight_kg", PropertySchema::number().nullable())
        .optional("reps", PropertySchema::number().nullable())
        .optional("distance_meters", PropertySchema::number().nullable())
        .optional("duration_seconds", PropertySchema::number().nullable())
        .optional("custom_metric", PropertySchema::any())
        .optional("rpe", PropertySchema::number().nullable())
}
