// ABOUTME: HevyApi capability trait, one async method per supported remote operation
// ABOUTME: Lets the tool layer depend on behavior rather than on the HTTP implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use hevy_core::errors::ClientResult;
use hevy_core::models::{RoutineFolderPayload, WebhookSubscriptionPayload, WorkoutPayload};
use hevy_core::pagination::PageParams;
use serde_json::Value;

/// Operations the Hevy public API offers to this server
///
/// Response bodies are returned as raw JSON; callers forward them verbatim.
/// Workout payloads are sent exactly as given, so callers normalize first.
#[async_trait]
pub trait HevyApi: Send + Sync {
    /// `GET /v1/workouts`
    async fn get_workouts(&self, page: PageParams) -> ClientResult<Value>;

    /// `GET /v1/workouts/{workout_id}`
    async fn get_workout_by_id(&self, workout_id: &str) -> ClientResult<Value>;

    /// `POST /v1/workouts`
    async fn create_workout(&self, workout: &WorkoutPayload) -> ClientResult<Value>;

    /// `PUT /v1/workouts/{workout_id}`
    async fn update_workout(
        &self,
        workout_id: &str,
        workout: &WorkoutPayload,
    ) -> ClientResult<Value>;

    /// `GET /v1/routine_folders`
    async fn get_routine_folders(&self, page: PageParams) -> ClientResult<Value>;

    /// `GET /v1/routine_folders/{folder_id}`
    async fn get_routine_folder_by_id(&self, folder_id: i64) -> ClientResult<Value>;

    /// `POST /v1/routine_folders`
    async fn create_routine_folder(&self, folder: &RoutineFolderPayload) -> ClientResult<Value>;

    /// `GET /v1/exercise_templates`
    async fn get_exercise_templates(&self, page: PageParams) -> ClientResult<Value>;

    /// `GET /v1/exercise_templates/{template_id}`
    async fn get_exercise_template_by_id(&self, template_id: &str) -> ClientResult<Value>;

    /// `GET /v1/webhook-subscription`
    async fn get_webhook_subscription(&self) -> ClientResult<Value>;

    /// `POST /v1/webhook-subscription`
    async fn create_webhook_subscription(
        &self,
        webhook: &WebhookSubscriptionPayload,
    ) -> ClientResult<Value>;

    /// `DELETE /v1/webhook-subscription`
    async fn delete_webhook_subscription(&self) -> ClientResult<()>;
}
