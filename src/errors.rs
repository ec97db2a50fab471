// ABOUTME: Re-export of the unified error system from hevy-core
// ABOUTME: Keeps crate::errors paths stable for server modules and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use hevy_core::errors::*;
