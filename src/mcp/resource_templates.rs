// ABOUTME: Templated MCP resources served alongside the Hevy tools
// ABOUTME: Implements greeting://{name}, which answers resources/read with "Hello, {name}!"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use hevy_core::constants::protocol::{GREETING_URI_PREFIX, GREETING_URI_TEMPLATE};

use crate::mcp::schema::{ResourceContents, ResourceTemplate};

/// Every resource template the server advertises
#[must_use]
pub fn resource_templates() -> Vec<ResourceTemplate> {
    vec![greeting_template()]
}

/// The `greeting://{name}` template
#[must_use]
pub fn greeting_template() -> ResourceTemplate {
    ResourceTemplate {
        uri_template: GREETING_URI_TEMPLATE.to_owned(),
        name: "greeting".to_owned(),
        title: "Greeting Resource".to_owned(),
        description: "Dynamic greeting generator".to_owned(),
        mime_type: None,
    }
}

/// Resolve a URI against every template; `None` when nothing matches
#[must_use]
pub fn read_resource(uri: &str) -> Option<ResourceContents> {
    read_greeting(uri)
}

/// Greeting for `greeting://{name}`
///
/// `name` is a single non-empty path segment and is percent-decoded.
#[must_use]
pub fn read_greeting(uri: &str) -> Option<ResourceContents> {
    let raw = uri.strip_prefix(GREETING_URI_PREFIX)?;
    if raw.is_empty() || raw.contains('/') {
        return None;
    }
    let name = urlencoding::decode(raw).ok()?;

    Some(ResourceContents {
        uri: uri.to_owned(),
        text: format!("Hello, {name}!"),
        mime_type: None,
    })
}
