// ABOUTME: Request payload models sent to the Hevy API
// ABOUTME: Re-exports workout, routine folder, and webhook payloads plus the tri-state field types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Payloads are transient: built from tool arguments, normalized, sent once,
//! and dropped. Response bodies are not modeled; they are forwarded to the
//! caller as raw JSON.

mod nullable;
mod routine_folder;
mod webhook;
mod workout;

pub use nullable::{Keyed, Nullable, Omittable};
pub use routine_folder::{RoutineFolderPayload, RoutineFolderRequest};
pub use webhook::{WebhookRequest, WebhookSubscriptionPayload};
pub use workout::{ExercisePayload, SetPayload, WorkoutPayload, WorkoutRequest};
