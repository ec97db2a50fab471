// ABOUTME: Webhook subscription tools: fetch, create, and delete the account's single subscription
// ABOUTME: Delete answers with a fixed confirmation instead of a response body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use futures_util::future::BoxFuture;
use hevy_core::constants::tools::{
    CREATE_WEBHOOK_SUBSCRIPTION, DELETE_WEBHOOK_SUBSCRIPTION, GET_WEBHOOK_SUBSCRIPTION,
    WEBHOOK_DELETED_MESSAGE,
};
use hevy_core::models::WebhookSubscriptionPayload;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppResult;
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::tools::args::parse_args;
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;

/// Arguments of tools that take none; validates that `arguments` is an object
#[derive(Debug, Deserialize)]
struct NoArgs {}

/// `getWebhookSubscription`
pub fn get_webhook_subscription(
    args: Value,
    context: &ToolExecutionContext,
) -> BoxFuture<'_, AppResult<ToolResult>> {
    Box::pin(async move {
        parse_args::<NoArgs>(GET_WEBHOOK_SUBSCRIPTION, args)?;
        let body = context.api().get_webhook_subscription().await?;
        ToolResult::json(&body)
    })
}

/// `createWebhookSubscription`
pub fn create_webhook_subscription(
    args: Value,
    context: &ToolExecutionContext,
) -> BoxFuture<'_, AppResult<ToolResult>> {
    Box::pin(async move {
        let webhook: WebhookSubscriptionPayload = parse_args(CREATE_WEBHOOK_SUBSCRIPTION, args)?;
        let body = context.api().create_webhook_subscription(&webhook).await?;
        ToolResult::json(&body)
    })
}

/// `deleteWebhookSubscription`
pub fn delete_webhook_subscription(
    args: Value,
    context: &ToolExecutionContext,
) -> BoxFuture<'_, AppResult<ToolResult>> {
    Box::pin(async move {
        parse_args::<NoArgs>(DELETE_WEBHOOK_SUBSCRIPTION, args)?;
        context.api().delete_webhook_subscription().await?;
        Ok(ToolResult::text(WEBHOOK_DELETED_MESSAGE))
    })
}

/// Input schema for `createWebhookSubscription`
#[must_use]
pub fn create_webhook_schema() -> JsonSchema {
    JsonSchema::empty()
        .required(
            "authToken",
            PropertySchema::string()
                .describe("Token Hevy sends in the Authorization header of each webhook call"),
        )
        .required(
            "url",
            PropertySchema::string().describe("URL that receives workout events"),
        )
}
