// ABOUTME: Application constants re-exported from recipe-core plus build metadata
// ABOUTME: Protocol versions, JSON-RPC error codes, tool names and pipeline limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use recipe_core::constants::*;

/// Server version from Cargo.toml
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
