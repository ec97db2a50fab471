// ABOUTME: reqwest-backed HevyApi implementation for the Hevy public API v1
// ABOUTME: Adds the api-key header, wraps request bodies in envelopes, and maps HTTP failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use async_trait::async_trait;
use hevy_core::constants::api::{
    paths, API_KEY_HEADER, DEFAULT_BASE_URL, DEFAULT_RETRY_AFTER_SECS,
};
use hevy_core::errors::{ClientError, ClientResult};
use hevy_core::models::{
    RoutineFolderPayload, RoutineFolderRequest, WebhookRequest, WebhookSubscriptionPayload,
    WorkoutPayload, WorkoutRequest,
};
use hevy_core::pagination::PageParams;
use reqwest::header::RETRY_AFTER;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::Value;
use tracing::{debug, error};

use crate::api::HevyApi;
use crate::http_client::shared_client;

/// Connection settings for [`HevyClient`]
#[derive(Clone)]
pub struct HevyClientConfig {
    /// Value of the `api-key` header; may be empty
    pub api_key: String,
    /// Base URL without trailing path, e.g. `https://api.hevyapp.com`
    pub base_url: String,
}

impl HevyClientConfig {
    /// Config for the production API
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// Override the base URL (tests, proxies)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl fmt::Debug for HevyClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HevyClientConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Hevy public API client
#[derive(Debug, Clone)]
pub struct HevyClient {
    config: HevyClientConfig,
    client: Client,
}

impl HevyClient {
    /// Create a client on top of the process-wide shared HTTP client
    #[must_use]
    pub fn new(config: HevyClientConfig) -> Self {
        Self::with_http_client(config, shared_client().clone())
    }

    /// Create a client with an explicit HTTP client
    #[must_use]
    pub const fn with_http_client(config: HevyClientConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.config.base_url.trim_end_matches('/'));
        debug!(method = %method, path, "Hevy API request");
        self.client
            .request(method, url)
            .header(API_KEY_HEADER, &self.config.api_key)
    }

    async fn execute(&self, builder: RequestBuilder, path: &str) -> ClientResult<Value> {
        let response = builder.send().await?;
        let status = response.status();
        debug!(path, status = status.as_u16(), "Hevy API response");

        if !status.is_success() {
            return Err(Self::handle_api_error(response, path).await);
        }

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&body).map_err(|e| {
            ClientError::InvalidResponse(format!("Failed to parse response from {path}: {e}"))
        })
    }

    async fn handle_api_error(response: Response, path: &str) -> ClientError {
        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok());
        let text = response.text().await.unwrap_or_default();

        error!(
            path,
            status,
            body_length = text.len(),
            "Hevy API request failed"
        );

        map_status(status, retry_after, text, path)
    }

    async fn list(&self, path: &str, page: PageParams) -> ClientResult<Value> {
        let builder = self.request(Method::GET, path).query(&page.query_pairs());
        self.execute(builder, path).await
    }

    async fn get(&self, path: &str) -> ClientResult<Value> {
        let builder = self.request(Method::GET, path);
        self.execute(builder, path).await
    }
}

/// Translate a non-success status into a `ClientError`
fn map_status(status: u16, retry_after: Option<u64>, body: String, path: &str) -> ClientError {
    match status {
        401 | 403 => ClientError::AuthenticationFailed {
            status_code: status,
            reason: body,
        },
        404 => ClientError::NotFound {
            resource: path.to_owned(),
        },
        429 => ClientError::RateLimitExceeded {
            retry_after_secs: retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS),
        },
        _ => ClientError::ApiError {
            status_code: status,
            message: body,
        },
    }
}

fn item_path(collection: &str, id: &str) -> String {
    format!("{collection}/{}", urlencoding::encode(id))
}

#[async_trait]
impl HevyApi for HevyClient {
    async fn get_workouts(&self, page: PageParams) -> ClientResult<Value> {
        self.list(paths::WORKOUTS, page).await
    }

    async fn get_workout_by_id(&self, workout_id: &str) -> ClientResult<Value> {
        self.get(&item_path(paths::WORKOUTS, workout_id)).await
    }

    async fn create_workout(&self, workout: &WorkoutPayload) -> ClientResult<Value> {
        let builder = self
            .request(Method::POST, paths::WORKOUTS)
            .json(&WorkoutRequest { workout });
        self.execute(builder, paths::WORKOUTS).await
    }

    async fn update_workout(
        &self,
        workout_id: &str,
        workout: &WorkoutPayload,
    ) -> ClientResult<Value> {
        let path = item_path(paths::WORKOUTS, workout_id);
        let builder = self
            .request(Method::PUT, &path)
            .json(&WorkoutRequest { workout });
        self.execute(builder, &path).await
    }

    async fn get_routine_folders(&self, page: PageParams) -> ClientResult<Value> {
        self.list(paths::ROUTINE_FOLDERS, page).await
    }

    async fn get_routine_folder_by_id(&self, folder_id: i64) -> ClientResult<Value> {
        self.get(&format!("{}/{folder_id}", paths::ROUTINE_FOLDERS))
            .await
    }

    async fn create_routine_folder(&self, folder: &RoutineFolderPayload) -> ClientResult<Value> {
        let builder = self
            .request(Method::POST, paths::ROUTINE_FOLDERS)
            .json(&RoutineFolderRequest {
                routine_folder: folder,
            });
        self.execute(builder, paths::ROUTINE_FOLDERS).await
    }

    async fn get_exercise_templates(&self, page: PageParams) -> ClientResult<Value> {
        self.list(paths::EXERCISE_TEMPLATES, page).await
    }

    async fn get_exercise_template_by_id(&self, template_id: &str) -> ClientResult<Value> {
        self.get(&item_path(paths::EXERCISE_TEMPLATES, template_id))
            .await
    }

    async fn get_webhook_subscription(&self) -> ClientResult<Value> {
        self.get(paths::WEBHOOK_SUBSCRIPTION).await
    }

    async fn create_webhook_subscription(
        &self,
        webhook: &WebhookSubscriptionPayload,
    ) -> ClientResult<Value> {
        let builder = self
            .request(Method::POST, paths::WEBHOOK_SUBSCRIPTION)
            .json(&WebhookRequest { webhook });
        self.execute(builder, paths::WEBHOOK_SUBSCRIPTION).await
    }

    async fn delete_webhook_subscription(&self) -> ClientResult<()> {
        let builder = self.request(Method::DELETE, paths::WEBHOOK_SUBSCRIPTION);
        self.execute(builder, paths::WEBHOOK_SUBSCRIPTION).await?;
        Ok(())
    }
}
