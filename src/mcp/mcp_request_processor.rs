// ABOUTME: MCP request processing and protocol handling for the recipe server
// ABOUTME: Validates, routes and executes JSON-RPC requests, resolving the session for tool calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Instant;

use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

use super::resources::ServerResources;
use super::schema::{InitializeRequest, InitializeResponse, ToolCall, ToolResponse};
use crate::constants::errors::{
    ERROR_INVALID_PARAMS, ERROR_INVALID_REQUEST, ERROR_METHOD_NOT_FOUND,
};
use crate::constants::limits::LOG_PREVIEW_CHARS;
use crate::constants::protocol::{mcp_protocol_version, JSONRPC_VERSION};
use crate::errors::{AppError, AppResult};
use crate::jsonrpc::{JsonRpcRequest, JsonRpcResponse};
use crate::logging::AppLogger;
use crate::tools::ToolExecutionContext;

/// Header a host may use to name its session
pub const SESSION_HEADER: &str = "mcp-session-id";

/// Processes MCP protocol requests with validation, routing, and execution
pub struct McpRequestProcessor {
    resources: Arc<ServerResources>,
    connection_session: String,
}

impl McpRequestProcessor {
    /// Create a processor for one connection.
    ///
    /// `connection_session` is the session key used when a tool call does not
    /// name its own session.
    #[must_use]
    pub fn new(resources: Arc<ServerResources>, connection_session: impl Into<String>) -> Self {
        Self {
            resources,
            connection_session: connection_session.into(),
        }
    }

    /// Handle an MCP request and return a response. Notifications get none.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let start_time = Instant::now();
        Self::log_request(&request);

        if request.method.starts_with("notifications/") || request.is_notification() {
            Self::handle_notification(&request);
            Self::log_completion("notification", start_time);
            return None;
        }

        let response = match self.process_request(&request).await {
            Ok(response) => response,
            Err(e) => Self::create_error_response(&request, &e),
        };

        Self::log_completion("request", start_time);
        Some(response)
    }

    fn create_error_response(request: &JsonRpcRequest, e: &AppError) -> JsonRpcResponse {
        let code = e.jsonrpc_code();
        if code == ERROR_INVALID_PARAMS {
            warn!(method = %request.method, id = ?request.id, "Invalid params: {}", e);
        } else {
            error!(method = %request.method, id = ?request.id, "Failed to process MCP request: {:#}", e);
        }
        JsonRpcResponse::error(request.id.clone(), code, e.message.clone())
    }

    /// Route a validated request
    async fn process_request(&self, request: &JsonRpcRequest) -> AppResult<JsonRpcResponse> {
        if let Some(invalid) = Self::validate_request(request) {
            return Ok(invalid);
        }

        match request.method.as_str() {
            "initialize" => self.handle_initialize(request),
            "ping" => Ok(JsonRpcResponse::success(request.id.clone(), json!({}))),
            "tools/list" => Ok(self.handle_tools_list(request)),
            "tools/call" => self.handle_tools_call(request).await,
            "resources/list" => Ok(JsonRpcResponse::success(
                request.id.clone(),
                json!({ "resources": [] }),
            )),
            "prompts/list" => Ok(JsonRpcResponse::success(
                request.id.clone(),
                json!({ "prompts": [] }),
            )),
            _ => Ok(Self::handle_unknown_method(request)),
        }
    }

    /// Reject requests that are not JSON-RPC 2.0 or have no method
    fn validate_request(request: &JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::error(
                request.id.clone(),
                ERROR_INVALID_REQUEST,
                format!(
                    "Invalid JSON-RPC version: got '{}', expected '{}'",
                    request.jsonrpc, JSONRPC_VERSION
                ),
            ));
        }
        if request.method.is_empty() {
            return Some(JsonRpcResponse::error(
                request.id.clone(),
                ERROR_INVALID_REQUEST,
                "Missing method",
            ));
        }
        None
    }

    fn handle_initialize(&self, request: &JsonRpcRequest) -> AppResult<JsonRpcResponse> {
        debug!("Handling initialize request");

        // Client details are informational; a malformed block does not fail the handshake
        match request
            .params
            .clone()
            .map(serde_json::from_value::<InitializeRequest>)
        {
            Some(Ok(init)) => info!(
                client = %init.client_info.name,
                client_version = %init.client_info.version,
                requested_protocol = %init.protocol_version,
                "MCP client connected"
            ),
            Some(Err(e)) => warn!("Unrecognized initialize params: {}", e),
            None => debug!("Initialize request without params"),
        }

        let response = InitializeResponse::new(
            mcp_protocol_version(),
            self.resources.server_name.clone(),
            self.resources.server_version.clone(),
        );
        Ok(JsonRpcResponse::success(
            request.id.clone(),
            serde_json::to_value(response)?,
        ))
    }

    fn handle_tools_list(&self, request: &JsonRpcRequest) -> JsonRpcResponse {
        debug!("Handling tools/list request");

        let tools = self.resources.tools.list_schemas();
        JsonRpcResponse::success(request.id.clone(), json!({ "tools": tools }))
    }

    async fn handle_tools_call(&self, request: &JsonRpcRequest) -> AppResult<JsonRpcResponse> {
        let params = request
            .params
            .as_ref()
            .ok_or_else(|| AppError::invalid_input("Missing parameters for tools/call"))?;
        let call: ToolCall = serde_json::from_value(params.clone())
            .map_err(|e| AppError::invalid_input(format!("Invalid tools/call parameters: {e}")))?;

        if !self.resources.tools.contains(&call.name) {
            warn!(tool = %call.name, "Unknown tool requested");
            return Ok(JsonRpcResponse::error(
                request.id.clone(),
                ERROR_INVALID_PARAMS,
                format!("Unknown tool: {}", call.name),
            ));
        }

        let session = self.resolve_session(request);
        let mut context = ToolExecutionContext::new(session, Arc::clone(&self.resources));
        if let Some(id) = &request.id {
            context = context.with_request_id(id.clone());
        }
        debug!(tool = %call.name, session = %context.session_key, "Handling tools/call request");

        let started = Instant::now();
        let arguments = call.arguments.unwrap_or_else(|| json!({}));
        let outcome = self
            .resources
            .tools
            .execute(&call.name, arguments, &context)
            .await;
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let result = outcome.inspect_err(|_| {
            AppLogger::log_mcp_tool_call(&context.session_key, &call.name, false, duration_ms);
        })?;
        AppLogger::log_mcp_tool_call(
            &context.session_key,
            &call.name,
            !result.is_error,
            duration_ms,
        );

        let response: ToolResponse = result.into();
        Ok(JsonRpcResponse::success(
            request.id.clone(),
            serde_json::to_value(response)?,
        ))
    }

    /// Session key: `params._meta.sessionId`, then the session header, then the connection
    fn resolve_session(&self, request: &JsonRpcRequest) -> String {
        request
            .params
            .as_ref()
            .and_then(|params| params.get("_meta"))
            .and_then(|meta| meta.get("sessionId"))
            .and_then(Value::as_str)
            .or_else(|| request.header(SESSION_HEADER))
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map_or_else(|| self.connection_session.clone(), str::to_owned)
    }

    fn handle_unknown_method(request: &JsonRpcRequest) -> JsonRpcResponse {
        warn!("Unknown MCP method: {}", request.method);
        JsonRpcResponse::error(
            request.id.clone(),
            ERROR_METHOD_NOT_FOUND,
            format!("Unknown method: {}", request.method),
        )
    }

    fn handle_notification(request: &JsonRpcRequest) {
        match request.method.as_str() {
            "notifications/initialized" => debug!("Client finished initialization"),
            "notifications/cancelled" => {
                debug!("Cancellation received; requests run to completion");
            }
            other => debug!("Unhandled notification: {}", other),
        }
    }

    fn log_request(request: &JsonRpcRequest) {
        debug!(
            mcp_method = %request.method,
            mcp_id = ?request.id,
            mcp_params_preview = ?request.params.as_ref().map(|p| {
                let s = p.to_string();
                if s.chars().count() > LOG_PREVIEW_CHARS {
                    format!("{}...[truncated]", s.chars().take(LOG_PREVIEW_CHARS).collect::<String>())
                } else {
                    s
                }
            }),
            "Received MCP request"
        );
    }

    fn log_completion(request_type: &str, start_time: Instant) {
        debug!(
            duration_ms = u64::try_from(start_time.elapsed().as_millis()).unwrap_or(0),
            "Completed MCP {} processing", request_type
        );
    }
}
