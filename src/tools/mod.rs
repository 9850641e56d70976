// ABOUTME: MCP tool layer: trait, registry, execution context and the recipe tool set
// ABOUTME: Tools validate arguments, drive session and generation services, and render replies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tools
//!
//! Each tool implements [`McpTool`] and is registered once in the
//! [`ToolRegistry`]. Argument problems surface as `Err(AppError)` and become
//! JSON-RPC invalid-params errors; domain failures come back as a
//! [`ToolResult`] with `is_error` set so the host shows the message.

/// Typed argument extraction
pub mod arguments;
/// Per-call execution context
pub mod context;
/// Tool implementations by category
pub mod implementations;
/// Localized reply texts
pub mod messages;
/// Tool registry
pub mod registry;
/// Tool results
pub mod result;
/// `McpTool` trait and capability flags
pub mod traits;

pub use context::ToolExecutionContext;
pub use registry::ToolRegistry;
pub use result::ToolResult;
pub use traits::{McpTool, ToolCapabilities};
