// ABOUTME: Line-delimited JSON-RPC transport over stdin/stdout for the MCP server
// ABOUTME: Reads one request per line, processes each on its own task, serializes writes through a mutex
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use super::mcp_request_processor::McpRequestProcessor;
use super::resources::ServerResources;
use crate::errors::{AppError, AppResult};
use crate::jsonrpc::{error_codes, JsonRpcError, JsonRpcRequest, JsonRpcResponse};

/// Handles stdio transport for MCP communication
pub struct StdioTransport {
    processor: McpRequestProcessor,
}

impl StdioTransport {
    /// Creates a new stdio transport instance
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self {
            processor: McpRequestProcessor::new(resources),
        }
    }

    /// Run on the process stdin/stdout until stdin closes
    ///
    /// # Errors
    ///
    /// Returns an error if reading stdin fails
    pub async fn run(&self) -> AppResult<()> {
        info!("MCP stdio transport ready - listening on stdin/stdout");
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    /// Serve requests from `reader`, writing one response line per request to `writer`
    ///
    /// Requests are processed concurrently, so responses may be written in a
    /// different order than the requests arrived. In-flight requests are
    /// awaited before returning at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from `reader` fails
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let writer = Arc::new(Mutex::new(writer));
        let mut lines = reader.lines();
        let mut in_flight = JoinSet::new();

        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| AppError::internal(format!("Failed to read request line: {e}")))?
        {
            if line.trim().is_empty() {
                continue;
            }

            let processor = self.processor.clone();
            let writer = Arc::clone(&writer);
            in_flight.spawn(async move {
                if let Some(response) = Self::process_line(&processor, &line).await {
                    write_response(&writer, &response).await;
                }
            });

            while in_flight.try_join_next().is_some() {}
        }

        debug!("stdin closed, waiting for {} in-flight requests", in_flight.len());
        while let Some(joined) = in_flight.join_next().await {
            if let Err(e) = joined {
                warn!("Request task failed: {}", e);
            }
        }

        info!("MCP stdio transport finished");
        Ok(())
    }

    async fn process_line(processor: &McpRequestProcessor, line: &str) -> Option<JsonRpcResponse> {
        let message: Value = match serde_json::from_str(line) {
            Ok(message) => message,
            Err(e) => {
                warn!("Invalid JSON-RPC message: {}", e);
                return Some(JsonRpcResponse::parse_error(e.to_string()));
            }
        };

        let id = message.get("id").cloned();
        match serde_json::from_value::<JsonRpcRequest>(message) {
            Ok(request) => processor.handle_request(request).await,
            Err(e) => {
                warn!("Failed to parse MCP request: {}", e);
                Some(JsonRpcResponse::from_error(
                    id,
                    JsonRpcError::with_data(
                        error_codes::INVALID_REQUEST,
                        "Invalid Request",
                        Value::String(e.to_string()),
                    ),
                ))
            }
        }
    }
}

async fn write_response<W>(writer: &Mutex<W>, response: &JsonRpcResponse)
where
    W: AsyncWrite + Unpin,
{
    let mut line = match serde_json::to_string(response) {
        Ok(json) => json,
        Err(e) => {
            warn!("Failed to serialize response: {}", e);
            return;
        }
    };
    line.push('\n');

    let mut writer = writer.lock().await;
    if let Err(e) = writer.write_all(line.as_bytes()).await {
        warn!("Failed to write response: {}", e);
        return;
    }
    if let Err(e) = writer.flush().await {
        warn!("Failed to flush response: {}", e);
    }
}
