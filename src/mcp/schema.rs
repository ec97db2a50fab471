// ABOUTME: MCP protocol schema definitions and message structures
// ABOUTME: Tool, resource, content, and initialize types serialized with MCP camelCase field names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! MCP Protocol Schema Definitions
//!
//! Type-safe definitions for the MCP messages this server produces and
//! consumes, plus a small builder vocabulary for tool input schemas.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server Information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Advertised server name
    pub name: String,
    /// Advertised server version
    pub version: String,
}

/// MCP Tool Schema Definition as listed by `tools/list`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Unique tool name
    pub name: String,
    /// Human-readable display title
    pub title: String,
    /// What the tool does
    pub description: String,
    /// JSON Schema of the `arguments` object
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonSchema,
    /// Behavioral hints for clients
    pub annotations: ToolAnnotations,
}

/// Behavioral hints attached to a tool listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolAnnotations {
    /// The tool does not modify remote state
    pub read_only_hint: bool,
    /// The tool may remove remote state
    pub destructive_hint: bool,
}

/// JSON Schema of a tool's argument object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Always `object`
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Argument properties keyed by name
    pub properties: BTreeMap<String, PropertySchema>,
    /// Names of required arguments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl JsonSchema {
    /// Object schema without properties
    #[must_use]
    pub fn empty() -> Self {
        Self {
            schema_type: "object".to_owned(),
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }

    /// Add an optional property
    #[must_use]
    pub fn optional(mut self, name: &str, schema: PropertySchema) -> Self {
        self.properties.insert(name.to_owned(), schema);
        self
    }

    /// Add a required property
    #[must_use]
    pub fn required(mut self, name: &str, schema: PropertySchema) -> Self {
        self.properties.insert(name.to_owned(), schema);
        self.required.push(name.to_owned());
        self
    }

    /// Convert into a property schema, for nesting an object inside another
    #[must_use]
    pub fn into_property(self) -> PropertySchema {
        PropertySchema {
            property_type: Some(SchemaType::Single(self.schema_type)),
            description: None,
            items: None,
            properties: Some(self.properties),
            required: if self.required.is_empty() {
                None
            } else {
                Some(self.required)
            },
        }
    }
}

/// A JSON Schema `type` keyword: one type name or a union of names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    /// `"type": "string"`
    Single(String),
    /// `"type": ["number", "null"]`
    Union(Vec<String>),
}

/// JSON Schema Property Definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    /// Type keyword; absent means any JSON value
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<SchemaType>,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Element schema for arrays
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<PropertySchema>>,
    /// Nested properties for objects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, PropertySchema>>,
    /// Required nested properties for objects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl PropertySchema {
    fn typed(type_name: &str) -> Self {
        Self {
            property_type: Some(SchemaType::Single(type_name.to_owned())),
            description: None,
            items: None,
            properties: None,
            required: None,
        }
    }

    /// `string`
    #[must_use]
    pub fn string() -> Self {
        Self::typed("string")
    }

    /// `integer`
    #[must_use]
    pub fn integer() -> Self {
        Self::typed("integer")
    }

    /// `number`
    #[must_use]
    pub fn number() -> Self {
        Self::typed("number")
    }

    /// `boolean`
    #[must_use]
    pub fn boolean() -> Self {
        Self::typed("boolean")
    }

    /// Any JSON value
    #[must_use]
    pub const fn any() -> Self {
        Self {
            property_type: None,
            description: None,
            items: None,
            properties: None,
            required: None,
        }
    }

    /// `array` of `items`
    #[must_use]
    pub fn array(items: Self) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::typed("array")
        }
    }

    /// Also accept `null`
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.property_type = match self.property_type.take() {
            Some(SchemaType::Single(name)) => Some(SchemaType::Union(vec![name, "null".to_owned()])),
            Some(SchemaType::Union(mut names)) => {
                if !names.iter().any(|name| name == "null") {
                    names.push("null".to_owned());
                }
                Some(SchemaType::Union(names))
            }
            None => None,
        };
        self
    }

    /// Attach a description
    #[must_use]
    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }
}

/// `tools/call` parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Tool to invoke
    pub name: String,
    /// Tool arguments; absent means `{}`
    #[serde(default)]
    pub arguments: Option<Value>,
}

/// `tools/call` result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResponse {
    /// Result content items
    pub content: Vec<Content>,
    /// Whether the tool failed while executing
    #[serde(rename = "isError")]
    pub is_error: bool,
}

/// Content types for MCP messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Content {
    /// Plain text
    #[serde(rename = "text")]
    Text {
        /// Text body
        text: String,
    },
}

impl Content {
    /// Text of a text item
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
        }
    }
}

/// `tools/list` result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListToolsResult {
    /// Every registered tool
    pub tools: Vec<ToolSchema>,
}

/// MCP Server Capabilities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerCapabilities {
    /// Tool support
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolsCapability>,
    /// Resource support
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourcesCapability>,
}

/// Tools capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsCapability {
    /// The tool list never changes at runtime
    #[serde(rename = "listChanged", skip_serializing_if = "Option::is_none")]
    pub list_changed: Option<bool>,
}

/// Resources capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesCapability {
    /// Subscriptions are not offered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribe: Option<bool>,
    /// The resource list never changes at runtime
    #[serde(rename = "listChanged", skip_serializing_if = "Option::is_none")]
    pub list_changed: Option<bool>,
}

/// Initialize Request parameters from the client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InitializeParams {
    /// Version the client would like to speak
    #[serde(rename = "protocolVersion", default)]
    pub protocol_version: Option<String>,
    /// Client identification
    #[serde(rename = "clientInfo", default)]
    pub client_info: Option<ClientInfo>,
}

/// Client Information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Client name
    pub name: String,
    /// Client version
    #[serde(default)]
    pub version: String,
}

/// Complete MCP Initialize Response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResponse {
    /// Protocol version the server speaks
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server identification
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
    /// Offered capabilities
    pub capabilities: ServerCapabilities,
    /// Usage hint for the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl InitializeResponse {
    /// Create a new initialize response with current server configuration
    #[must_use]
    pub fn new(protocol_version: String, server_name: String, server_version: String) -> Self {
        Self {
            protocol_version,
            server_info: ServerInfo {
                name: server_name,
                version: server_version,
            },
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                resources: Some(ResourcesCapability {
                    subscribe: Some(false),
                    list_changed: Some(false),
                }),
            },
            instructions: Some(
                "Tools for the Hevy workout tracker: list and fetch workouts, routine folders and \
                 exercise templates, create or update workouts, and manage the webhook subscription."
                    .to_owned(),
            ),
        }
    }
}

/// A templated resource advertised by `resources/templates/list`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTemplate {
    /// RFC 6570 URI template
    pub uri_template: String,
    /// Programmatic name
    pub name: String,
    /// Display title
    pub title: String,
    /// What the resource yields
    pub description: String,
    /// Content type of the resource text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// `resources/templates/list` result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResourceTemplatesResult {
    /// Every resource template
    pub resource_templates: Vec<ResourceTemplate>,
}

/// A concrete resource advertised by `resources/list`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Resource URI
    pub uri: String,
    /// Programmatic name
    pub name: String,
}

/// `resources/list` result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResourcesResult {
    /// Concrete resources; templates are listed separately
    pub resources: Vec<Resource>,
}

/// `resources/read` parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadResourceParams {
    /// URI to read
    pub uri: String,
}

/// Text contents of a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceContents {
    /// URI the contents belong to
    pub uri: String,
    /// Resource text
    pub text: String,
    /// Content type of `text`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// `resources/read` result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadResourceResult {
    /// Contents for the requested URI
    pub contents: Vec<ResourceContents>,
}
