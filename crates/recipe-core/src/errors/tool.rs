// ABOUTME: Argument and lookup errors raised before a recipe tool runs
// ABOUTME: Converted into AppError so they surface as JSON-RPC invalid-params responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Errors
//!
//! A `tools/call` can be rejected before any recipe logic runs: the tool name
//! may be unknown or an argument missing or malformed. These are protocol
//! errors, unlike a failed generation which the tool reports in its result.

use thiserror::Error;

/// Why a tool call was rejected up front
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// No tool is registered under the requested name
    #[error("Unknown tool: {tool}")]
    NotFound {
        /// Requested tool name
        tool: String,
    },
    /// An argument is present but unusable
    #[error("Invalid '{parameter}' for {tool}: {reason}")]
    InvalidParameter {
        /// Tool being called
        tool: String,
        /// Argument name
        parameter: String,
        /// What was wrong with the value
        reason: String,
    },
    /// A required argument is absent or null
    #[error("Missing required argument '{parameter}' for {tool}")]
    MissingParameter {
        /// Tool being called
        tool: String,
        /// Argument name
        parameter: String,
    },
}

impl ToolError {
    /// Unknown tool name
    #[must_use]
    pub fn not_found(tool: impl Into<String>) -> Self {
        Self::NotFound { tool: tool.into() }
    }

    /// Unusable argument value
    #[must_use]
    pub fn invalid_parameter(
        tool: impl Into<String>,
        parameter: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            tool: tool.into(),
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Absent argument
    #[must_use]
    pub fn missing_parameter(tool: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::MissingParameter {
            tool: tool.into(),
            parameter: parameter.into(),
        }
    }

    /// Tool the rejected call addressed
    #[must_use]
    pub fn tool(&self) -> &str {
        match self {
            Self::NotFound { tool }
            | Self::InvalidParameter { tool, .. }
            | Self::MissingParameter { tool, .. } => tool,
        }
    }
}
