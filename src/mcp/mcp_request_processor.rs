// ABOUTME: MCP request processing and protocol handling for the Hevy stdio server
// ABOUTME: Validates, routes, and executes JSON-RPC requests, splitting request errors from tool failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Instant;

use hevy_core::constants::protocol::MAX_LOGGED_REQUEST_CHARS;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, error, warn};

use super::resource_templates;
use super::resources::ServerResources;
use super::schema::{
    InitializeParams, InitializeResponse, ListResourceTemplatesResult, ListResourcesResult,
    ListToolsResult, ReadResourceParams, ReadResourceResult, ToolCall, ToolResponse,
};
use crate::errors::{AppError, AppResult};
use crate::jsonrpc::{error_codes, JsonRpcError, JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION};
use crate::logging::truncate_for_log;
use crate::tools::ToolResult;

/// Processes MCP protocol requests with validation, routing, and execution
#[derive(Debug, Clone)]
pub struct McpRequestProcessor {
    resources: Arc<ServerResources>,
}

impl McpRequestProcessor {
    /// Create a new MCP request processor
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Handle an MCP request and return a response
    ///
    /// Notifications (no `id`, or any `notifications/*` method) yield `None`.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let start_time = Instant::now();
        Self::log_request(&request);

        if request.method.starts_with("notifications/") || request.is_notification() {
            Self::handle_notification(&request);
            Self::log_completion("notification", &request.method, start_time);
            return None;
        }

        let response = self.process_or_error(&request).await;
        Self::log_completion("request", &request.method, start_time);
        Some(response)
    }

    async fn process_or_error(&self, request: &JsonRpcRequest) -> JsonRpcResponse {
        if let Err(invalid) = Self::validate_request(request) {
            warn!("Rejected invalid JSON-RPC request: {}", invalid.message);
            return JsonRpcResponse::from_error(request.id.clone(), invalid);
        }

        match self.process_request(request).await {
            Ok(result) => JsonRpcResponse::success(request.id.clone(), result),
            Err(e) => Self::create_error_response(request, &e),
        }
    }

    fn create_error_response(request: &JsonRpcRequest, e: &AppError) -> JsonRpcResponse {
        if e.code.is_request_error() {
            debug!(
                "Request error for method={} id={:?}: {}",
                request.method, request.id, e
            );
        } else {
            error!(
                "Failed to process MCP request: {} | Request: method={}, id={:?}",
                e, request.method, request.id
            );
        }
        JsonRpcResponse::from_app_error(request.id.clone(), e)
    }

    /// Route to the handler for the request method
    async fn process_request(&self, request: &JsonRpcRequest) -> AppResult<Value> {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request),
            "ping" => Ok(json!({})),
            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tools_call(request).await,
            "resources/list" => to_result(&ListResourcesResult { resources: vec![] }),
            "resources/templates/list" => to_result(&ListResourceTemplatesResult {
                resource_templates: resource_templates::resource_templates(),
            }),
            "resources/read" => Self::handle_resources_read(request),
            method => {
                warn!("Unknown MCP method: {}", method);
                Err(AppError::method_not_found(method))
            }
        }
    }

    /// Validate JSON-RPC envelope fields
    fn validate_request(request: &JsonRpcRequest) -> Result<(), JsonRpcError> {
        if request.jsonrpc != JSONRPC_VERSION {
            return Err(JsonRpcError::new(
                error_codes::INVALID_REQUEST,
                format!(
                    "Invalid JSON-RPC version: got '{}', expected '{}'",
                    request.jsonrpc, JSONRPC_VERSION
                ),
            ));
        }

        if request
            .id
            .as_ref()
            .is_some_and(|id| !(id.is_string() || id.is_number()))
        {
            return Err(JsonRpcError::new(
                error_codes::INVALID_REQUEST,
                "Request id must be a string or number",
            ));
        }

        if request.method.is_empty() {
            return Err(JsonRpcError::new(
                error_codes::INVALID_REQUEST,
                "Missing method",
            ));
        }

        Ok(())
    }

    fn handle_initialize(&self, request: &JsonRpcRequest) -> AppResult<Value> {
        let params: InitializeParams = match &request.params {
            Some(params) => parse_params("initialize", params)?,
            None => InitializeParams::default(),
        };

        if let Some(client) = &params.client_info {
            debug!(
                "Initialize from client {} {} (protocol {:?})",
                client.name, client.version, params.protocol_version
            );
        }

        let config = &self.resources.config;
        to_result(&InitializeResponse::new(
            config.protocol_version.clone(),
            config.server_name.clone(),
            config.server_version.clone(),
        ))
    }

    fn handle_tools_list(&self) -> AppResult<Value> {
        to_result(&ListToolsResult {
            tools: self.resources.tools.list_schemas(),
        })
    }

    /// Handle tools/call request
    ///
    /// Unknown tools and invalid arguments fail the request; remote and
    /// internal failures become a tool result flagged `isError`.
    async fn handle_tools_call(&self, request: &JsonRpcRequest) -> AppResult<Value> {
        let params = request
            .params
            .as_ref()
            .ok_or_else(|| AppError::invalid_input("Missing parameters for tools/call"))?;
        let call: ToolCall = parse_params("tools/call", params)?;

        let context = self.resources.tool_context(request.id.clone());
        let arguments = call.arguments.unwrap_or(Value::Null);

        let result = match self
            .resources
            .tools
            .execute(&call.name, arguments, &context)
            .await
        {
            Ok(result) => result,
            Err(e) if e.code.is_request_error() => return Err(e),
            Err(e) => ToolResult::error(e.message),
        };

        to_result(&ToolResponse::from(result))
    }

    fn handle_resources_read(request: &JsonRpcRequest) -> AppResult<Value> {
        let params = request
            .params
            .as_ref()
            .ok_or_else(|| AppError::invalid_input("Missing parameters for resources/read"))?;
        let ReadResourceParams { uri } = parse_params("resources/read", params)?;

        let contents = resource_templates::read_resource(&uri)
            .ok_or_else(|| AppError::not_found(format!("Resource {uri}")))?;

        to_result(&ReadResourceResult {
            contents: vec![contents],
        })
    }

    fn handle_notification(request: &JsonRpcRequest) {
        match request.method.as_str() {
            "notifications/initialized" => debug!("Client finished initialization"),
            "notifications/cancelled" => debug!("Request cancelled notification received"),
            other => debug!("Unhandled notification: {}", other),
        }
    }

    fn log_request(request: &JsonRpcRequest) {
        let params = request
            .params
            .as_ref()
            .map_or_else(String::new, Value::to_string);
        debug!(
            mcp.method = %request.method,
            mcp.id = ?request.id,
            "MCP request params: {}",
            truncate_for_log(&params, MAX_LOGGED_REQUEST_CHARS)
        );
    }

    fn log_completion(kind: &str, method: &str, start_time: Instant) {
        debug!(
            "MCP {} {} completed in {}ms",
            kind,
            method,
            start_time.elapsed().as_millis()
        );
    }
}

fn parse_params<T: DeserializeOwned>(method: &str, params: &Value) -> AppResult<T> {
    T::deserialize(params)
        .map_err(|e| AppError::invalid_input(format!("Invalid parameters for {method}: {e}")))
}

fn to_result<T: Serialize>(value: &T) -> AppResult<Value> {
    serde_json::to_value(value).map_err(|e| AppError::serialization("MCP result", e))
}
