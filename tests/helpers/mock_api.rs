// ABOUTME: Recording in-memory HevyApi implementation for tool and processor tests
// ABOUTME: Captures every call with its arguments and can be switched into a failure mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Mutex;

use async_trait::async_trait;
use hevy_client::{ClientError, ClientResult, HevyApi};
use hevy_core::models::{RoutineFolderPayload, WebhookSubscriptionPayload, WorkoutPayload};
use hevy_core::pagination::PageParams;
use serde_json::{json, Value};

/// One call made against the mock
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// `HevyApi` method name
    pub operation: &'static str,
    /// Path identifier, when the operation takes one
    pub id: Option<String>,
    /// Pagination, for list operations
    pub page: Option<PageParams>,
    /// Serialized request payload, for write operations
    pub body: Option<Value>,
}

impl RecordedCall {
    fn new(operation: &'static str) -> Self {
        Self {
            operation,
            id: None,
            page: None,
            body: None,
        }
    }
}

/// `HevyApi` double that records calls and answers with canned JSON
#[derive(Default)]
pub struct MockHevyApi {
    calls: Mutex<Vec<RecordedCall>>,
    failure: Option<fn() -> ClientError>,
}

impl MockHevyApi {
    /// Mock that succeeds on every call
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock whose every call fails with the error `make_error` builds
    pub fn failing(make_error: fn() -> ClientError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(make_error),
        }
    }

    /// All calls so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The only call made; panics unless exactly one was made
    pub fn single_call(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {calls:?}");
        calls.into_iter().next().unwrap()
    }

    fn record(&self, call: RecordedCall) -> ClientResult<()> {
        self.calls.lock().unwrap().push(call);
        match self.failure {
            Some(make_error) => Err(make_error()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl HevyApi for MockHevyApi {
    async fn get_workouts(&self, page: PageParams) -> ClientResult<Value> {
        self.record(RecordedCall {
            page: Some(page),
            ..RecordedCall::new("get_workouts")
        })?;
        Ok(json!({"page": page.page, "page_count": 1, "workouts": []}))
    }

    async fn get_workout_by_id(&self, workout_id: &str) -> ClientResult<Value> {
        self.record(RecordedCall {
            id: Some(workout_id.to_owned()),
            ..RecordedCall::new("get_workout_by_id")
        })?;
        Ok(json!({"id": workout_id, "title": "Push Day"}))
    }

    async fn create_workout(&self, workout: &WorkoutPayload) -> ClientResult<Value> {
        self.record(RecordedCall {
            body: Some(serde_json::to_value(workout).unwrap()),
            ..RecordedCall::new("create_workout")
        })?;
        Ok(json!({"workout": [{"id": "w-new", "title": workout.title}]}))
    }

    async fn update_workout(
        &self,
        workout_id: &str,
        workout: &WorkoutPayload,
    ) -> ClientResult<Value> {
        self.record(RecordedCall {
            id: Some(workout_id.to_owned()),
            body: Some(serde_json::to_value(workout).unwrap()),
            ..RecordedCall::new("update_workout")
        })?;
        Ok(json!({"workout": [{"id": workout_id, "title": workout.title}]}))
    }

    async fn get_routine_folders(&self, page: PageParams) -> ClientResult<Value> {
        self.record(RecordedCall {
            page: Some(page),
            ..RecordedCall::new("get_routine_folders")
        })?;
        Ok(json!({"page": page.page, "page_count": 1, "routine_folders": []}))
    }

    async fn get_routine_folder_by_id(&self, folder_id: i64) -> ClientResult<Value> {
        self.record(RecordedCall {
            id: Some(folder_id.to_string()),
            ..RecordedCall::new("get_routine_folder_by_id")
        })?;
        Ok(json!({"routine_folder": {"id": folder_id, "title": "Strength"}}))
    }

    async fn create_routine_folder(&self, folder: &RoutineFolderPayload) -> ClientResult<Value> {
        self.record(RecordedCall {
            body: Some(serde_json::to_value(folder).unwrap()),
            ..RecordedCall::new("create_routine_folder")
        })?;
        Ok(json!({"routine_folder": {"id": 42, "title": folder.title}}))
    }

    async fn get_exercise_templates(&self, page: PageParams) -> ClientResult<Value> {
        self.record(RecordedCall {
            page: Some(page),
            ..RecordedCall::new("get_exercise_templates")
        })?;
        Ok(json!({"page": page.page, "page_count": 1, "exercise_templates": []}))
    }

    async fn get_exercise_template_by_id(&self, template_id: &str) -> ClientResult<Value> {
        self.record(RecordedCall {
            id: Some(template_id.to_owned()),
            ..RecordedCall::new("get_exercise_template_by_id")
        })?;
        Ok(json!({"id": template_id, "title": "Bench Press (Barbell)"}))
    }

    async fn get_webhook_subscription(&self) -> ClientResult<Value> {
        self.record(RecordedCall::new("get_webhook_subscription"))?;
        Ok(json!({"url": "https://example.com/hook", "auth_token": "Bearer abc"}))
    }

    async fn create_webhook_subscription(
        &self,
        webhook: &WebhookSubscriptionPayload,
    ) -> ClientResult<Value> {
        self.record(RecordedCall {
            body: Some(serde_json::to_value(webhook).unwrap()),
            ..RecordedCall::new("create_webhook_subscription")
        })?;
        Ok(json!({"url": webhook.url}))
    }

    async fn delete_webhook_subscription(&self) -> ClientResult<()> {
        self.record(RecordedCall::new("delete_webhook_subscription"))
    }
}
