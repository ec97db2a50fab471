// ABOUTME: Webhook subscription payload and its Hevy API request envelope
// ABOUTME: Serialized as {"webhook": {"url": ..., "authToken": ...}}
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

/// A webhook subscription to create
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookSubscriptionPayload {
    /// URL Hevy will call on workout events
    pub url: String,
    /// Token Hevy sends back in the `Authorization` header
    pub auth_token: String,
}

impl fmt::Debug for WebhookSubscriptionPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookSubscriptionPayload")
            .field("url", &self.url)
            .field("auth_token", &"[REDACTED]")
            .finish()
    }
}

/// Request body wrapper for webhook creation
#[derive(Debug, Serialize)]
pub struct WebhookRequest<'a> {
    /// Wrapped subscription
    pub webhook: &'a WebhookSubscriptionPayload,
}
