// ABOUTME: Defines the McpTool trait and ToolCapabilities for the recipe tool set
// ABOUTME: Tools implement this trait to be registered and executed via the ToolRegistry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # MCP Tool Trait and Capabilities
//!
//! Every tool provides its metadata (name, description, input schema), a set
//! of capability flags, and an async `execute` that receives the call's
//! arguments together with the resolved session context.

use async_trait::async_trait;
use bitflags::bitflags;
use serde_json::Value;

use crate::errors::AppResult;
use crate::mcp::schema::{JsonSchema, ToolSchema};

use super::context::ToolExecutionContext;
use super::result::ToolResult;

bitflags! {
    /// Capabilities that tools declare for discovery and logging
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ToolCapabilities: u8 {
        /// Tool reads session preferences or cached recipes
        const READS_SESSION = 0b0000_0001;
        /// Tool modifies session preferences or cached recipes
        const WRITES_SESSION = 0b0000_0010;
        /// Tool calls the hosted completion backend
        const CALLS_BACKEND = 0b0000_0100;
        /// Tool writes files to disk
        const WRITES_FILES = 0b0000_1000;
    }
}

impl ToolCapabilities {
    /// Get a description of all enabled capabilities for logging
    #[must_use]
    pub fn describe(&self) -> String {
        let parts: Vec<&str> = [
            (Self::READS_SESSION, "reads_session"),
            (Self::WRITES_SESSION, "writes_session"),
            (Self::CALLS_BACKEND, "calls_backend"),
            (Self::WRITES_FILES, "writes_files"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
        .collect();

        if parts.is_empty() {
            "none".to_owned()
        } else {
            parts.join(", ")
        }
    }
}

/// The trait every MCP tool implements.
///
/// Tools are `Send + Sync` so one instance serves concurrent calls from
/// different sessions; all per-session state lives in the context resources.
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Unique identifier used for lookup and in `tools/call`
    fn name(&self) -> &'static str;

    /// Description for the host model
    fn description(&self) -> &'static str;

    /// JSON Schema for the arguments
    fn input_schema(&self) -> JsonSchema;

    /// Capability flags
    fn capabilities(&self) -> ToolCapabilities;

    /// Execute the tool
    ///
    /// # Errors
    ///
    /// Returns `AppError` for argument validation failures. Domain failures
    /// (backend down, bad model reply, unknown recipe number) are reported as
    /// error results, not as `Err`.
    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult>;

    /// Schema entry for `tools/list`
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_owned(),
            description: self.description().to_owned(),
            input_schema: self.input_schema(),
        }
    }
}
