// ABOUTME: Configuration module for the recipe server
// ABOUTME: Environment-driven settings plus the typed enums they parse into
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Server configuration loaded from environment variables
pub mod environment;
/// Log level and completion provider enums
pub mod types;

pub use environment::{CompletionConfig, ServerConfig};
pub use types::{CompletionProviderType, LogLevel};
