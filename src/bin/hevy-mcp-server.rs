// ABOUTME: Stdio MCP server binary exposing the Hevy workout API as MCP tools
// ABOUTME: Loads configuration, sets up stderr logging, and serves JSON-RPC on stdin/stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Hevy MCP Server Binary
//!
//! Started by an MCP client as a child process. Reads `HEVY_API_KEY` (and an
//! optional `.env` file) and exits when stdin closes.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use hevy_client::{initialize_shared_client, HevyClient, HevyClientConfig};
use hevy_mcp_server::{
    config::{load_dotenv, ServerConfig},
    logging::{LogFormat, LoggingConfig},
    mcp::{ServerResources, StdioTransport},
};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "hevy-mcp-server")]
#[command(about = "Hevy MCP Server - Hevy workout API tools for LLM agents over stdio")]
#[command(version)]
pub struct Args {
    /// Override the Hevy API base URL
    #[arg(long)]
    api_base_url: Option<String>,

    /// Log format written to stderr (json, pretty, compact)
    #[arg(long)]
    log_format: Option<LogFormat>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let env_file = load_dotenv();

    let mut logging_config = LoggingConfig::from_env();
    if let Some(format) = args.log_format {
        logging_config = logging_config.with_format(format);
    }
    logging_config.init()?;

    match env_file {
        Some(path) => info!("Loaded environment from {}", path.display()),
        None => debug!("No .env file found"),
    }

    let mut config = ServerConfig::from_env()?;
    if let Some(base_url) = args.api_base_url {
        config = config.with_base_url(base_url);
        config.validate()?;
    }
    info!("{}", config.summary());

    initialize_shared_client(config.hevy.timeout_secs, config.hevy.connect_timeout_secs);
    let client = HevyClient::new(
        HevyClientConfig::new(config.hevy.api_key.clone())
            .with_base_url(config.hevy.base_url.clone()),
    );

    let resources = Arc::new(ServerResources::new(config, Arc::new(client)));
    info!("Registered {} tools", resources.tools.len());

    StdioTransport::new(resources).run().await?;
    Ok(())
}
