// ABOUTME: Defines ToolResult, the ordered text blocks a tool call returns
// ABOUTME: Converts into the MCP ToolResponse payload with the isError flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::Value;

use crate::mcp::schema::{Content, ToolResponse};

/// Result returned by tool execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResult {
    /// Ordered content blocks shown to the user
    pub content: Vec<Content>,
    /// Optional machine-readable payload
    pub structured_content: Option<Value>,
    /// Whether this result represents an error condition
    pub is_error: bool,
}

impl ToolResult {
    /// Successful result with one text block
    #[must_use]
    pub fn text(message: impl Into<String>) -> Self {
        Self::texts([message.into()])
    }

    /// Successful result with several text blocks, in order
    #[must_use]
    pub fn texts<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            content: messages.into_iter().map(Content::text).collect(),
            structured_content: None,
            is_error: false,
        }
    }

    /// Error result with one user-facing text block
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            is_error: true,
            ..Self::text(message)
        }
    }

    /// Attach a structured payload
    #[must_use]
    pub fn with_structured(mut self, value: Value) -> Self {
        self.structured_content = Some(value);
        self
    }

    /// Concatenated text of every block, mainly for logs and tests
    #[must_use]
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .map(|Content::Text { text }| text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<ToolResult> for ToolResponse {
    fn from(result: ToolResult) -> Self {
        Self {
            content: result.content,
            is_error: result.is_error,
            structured_content: result.structured_content,
        }
    }
}
