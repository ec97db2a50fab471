// ABOUTME: Routine folder creation payload and its Hevy API request envelope
// ABOUTME: Serialized as {"routine_folder": {"title": ...}}
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A new routine folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineFolderPayload {
    /// Folder title
    pub title: String,
}

/// Request body wrapper for folder creation
#[derive(Debug, Serialize)]
pub struct RoutineFolderRequest<'a> {
    /// Wrapped folder
    pub routine_folder: &'a RoutineFolderPayload,
}
