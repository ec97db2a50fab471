// ABOUTME: Environment-based server configuration for the Hevy MCP server
// ABOUTME: Reads the Hevy API key, base URL, HTTP timeouts, and MCP protocol settings at start-up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;
use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use hevy_core::constants::api::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};
use hevy_core::constants::protocol::{
    DEFAULT_MCP_PROTOCOL_VERSION, DEFAULT_SERVER_NAME, SERVER_VERSION,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Environment type for logging and diagnostics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed for real users
    Production,
    /// Automated test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Connection settings for the Hevy REST API
#[derive(Clone, Serialize, Deserialize)]
pub struct HevyApiConfig {
    /// Value of the `api-key` header; empty when not configured
    #[serde(default, skip_serializing)]
    pub api_key: String,
    /// Scheme and host of the API, without a trailing slash
    pub base_url: String,
    /// Whole-request timeout
    pub timeout_secs: u64,
    /// TCP connect timeout
    pub connect_timeout_secs: u64,
}

impl HevyApiConfig {
    /// Whether an API key was provided
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl Default for HevyApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for HevyApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HevyApiConfig")
            .field("api_key", &if self.has_api_key() { "[REDACTED]" } else { "" })
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Hevy API connection settings
    pub hevy: HevyApiConfig,
    /// MCP protocol version reported by `initialize`
    pub protocol_version: String,
    /// Server name reported by `initialize`
    pub server_name: String,
    /// Server version reported by `initialize`
    pub server_version: String,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            hevy: HevyApiConfig::default(),
            protocol_version: DEFAULT_MCP_PROTOCOL_VERSION.to_owned(),
            server_name: DEFAULT_SERVER_NAME.to_owned(),
            server_version: SERVER_VERSION.to_owned(),
            environment: Environment::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed or the
    /// resulting configuration fails validation
    ///
    /// Reads the process environment only; call [`load_dotenv`] first to pick
    /// up a `.env` file
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            hevy: HevyApiConfig {
                api_key: env_var_or("HEVY_API_KEY", ""),
                base_url: env_var_or("HEVY_API_BASE_URL", DEFAULT_BASE_URL)
                    .trim_end_matches('/')
                    .to_owned(),
                timeout_secs: env_var_or("HEVY_HTTP_TIMEOUT_SECS", "30")
                    .parse()
                    .context("Invalid HEVY_HTTP_TIMEOUT_SECS value")?,
                connect_timeout_secs: env_var_or("HEVY_HTTP_CONNECT_TIMEOUT_SECS", "10")
                    .parse()
                    .context("Invalid HEVY_HTTP_CONNECT_TIMEOUT_SECS value")?,
            },
            protocol_version: env_var_or("MCP_PROTOCOL_VERSION", DEFAULT_MCP_PROTOCOL_VERSION),
            server_name: env_var_or("SERVER_NAME", DEFAULT_SERVER_NAME),
            server_version: SERVER_VERSION.to_owned(),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Replace the API base URL, e.g. from a command-line flag
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.hevy.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not http(s) or a timeout is zero
    pub fn validate(&self) -> Result<()> {
        if !(self.hevy.base_url.starts_with("http://") || self.hevy.base_url.starts_with("https://"))
        {
            return Err(anyhow::anyhow!(
                "HEVY_API_BASE_URL must start with http:// or https://, got '{}'",
                self.hevy.base_url
            ));
        }

        if self.hevy.timeout_secs == 0 || self.hevy.connect_timeout_secs == 0 {
            return Err(anyhow::anyhow!("HTTP timeouts must be greater than zero"));
        }

        if !self.hevy.has_api_key() {
            warn!("HEVY_API_KEY is not set; Hevy API calls will be rejected");
        }

        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Hevy MCP Server Configuration:\n\
             - Server: {} {}\n\
             - Environment: {}\n\
             - Protocol Version: {}\n\
             - Hevy API: {}\n\
             - Hevy API Key: {}\n\
             - HTTP Timeouts: {}s request, {}s connect",
            self.server_name,
            self.server_version,
            self.environment,
            self.protocol_version,
            self.hevy.base_url,
            if self.hevy.has_api_key() {
                "Set"
            } else {
                "Missing"
            },
            self.hevy.timeout_secs,
            self.hevy.connect_timeout_secs,
        )
    }
}

/// Load variables from a `.env` file in the working directory or its parents
///
/// Must run before [`crate::logging::LoggingConfig::from_env`] so that
/// `RUST_LOG` and `LOG_FORMAT` from the file take effect. Variables already
/// set in the process environment win over the file.
#[must_use]
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("test"),
            Environment::Testing
        );
        assert_eq!(
            Environment::from_str_or_default("invalid"),
            Environment::Development
        );
    }

    #[test]
    fn test_summary_hides_api_key() {
        let mut config = ServerConfig::default();
        config.hevy.api_key = "super-secret".to_owned();
        let summary = config.summary();
        assert!(!summary.contains("super-secret"));
        assert!(summary.contains("Hevy API Key: Set"));
        assert!(!format!("{config:?}").contains("super-secret"));
    }

    #[test]
    fn test_serialized_config_omits_api_key() {
        let mut config = ServerConfig::default();
        config.hevy.api_key = "super-secret".to_owned();
        let json = serde_json::to_value(&config).unwrap();
        assert!(json["hevy"].get("api_key").is_none());
        assert!(!json.to_string().contains("super-secret"));
        assert_eq!(json["hevy"]["base_url"], "https://api.hevyapp.com");
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let config = ServerConfig::default().with_base_url("ftp://api.hevyapp.com");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_with_base_url_trims_slash() {
        let config = ServerConfig::default().with_base_url("http://localhost:8080/");
        assert_eq!(config.hevy.base_url, "http://localhost:8080");
    }
}
