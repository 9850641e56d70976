// ABOUTME: Defines ToolExecutionContext which gives tools their session key and shared resources
// ABOUTME: Built per tools/call after the session key has been resolved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::mcp::resources::ServerResources;
use crate::session::Language;

/// Context provided to every tool execution
#[derive(Clone)]
pub struct ToolExecutionContext {
    /// Opaque key of the calling session
    pub session_key: String,
    /// Request ID for tracing/logging
    pub request_id: Option<Value>,
    /// Shared server resources
    pub resources: Arc<ServerResources>,
}

impl ToolExecutionContext {
    /// Create a context for one session
    #[must_use]
    pub fn new(session_key: impl Into<String>, resources: Arc<ServerResources>) -> Self {
        Self {
            session_key: session_key.into(),
            request_id: None,
            resources,
        }
    }

    /// Set request ID for tracing
    #[must_use]
    pub fn with_request_id(mut self, request_id: Value) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Language the session's replies are rendered in
    #[must_use]
    pub fn language(&self) -> Language {
        self.resources
            .sessions
            .get_preferences(&self.session_key)
            .language
    }
}

impl fmt::Debug for ToolExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolExecutionContext")
            .field("session_key", &self.session_key)
            .field("request_id", &self.request_id)
            .finish_non_exhaustive()
    }
}
