// ABOUTME: Stdio transport for the MCP server: newline-delimited JSON-RPC over stdin/stdout
// ABOUTME: Spawns one task per request and serializes whole response lines through a shared writer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::mcp_request_processor::McpRequestProcessor;
use super::resources::ServerResources;
use crate::constants::errors::{ERROR_INVALID_REQUEST, ERROR_PARSE, MSG_PARSE_ERROR};
use crate::errors::{AppError, AppResult};
use crate::jsonrpc::{JsonRpcRequest, JsonRpcResponse};

/// Handles stdio transport for MCP communication
pub struct StdioTransport {
    resources: Arc<ServerResources>,
    connection_session: String,
}

impl StdioTransport {
    /// Creates a new stdio transport with a fresh connection session key
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self {
            resources,
            connection_session: Uuid::new_v4().to_string(),
        }
    }

    /// Session key used for calls that do not name a session
    #[must_use]
    pub fn connection_session(&self) -> &str {
        &self.connection_session
    }

    /// Run over the process stdin/stdout until stdin closes
    ///
    /// # Errors
    /// Returns an error if reading stdin fails
    pub async fn run(&self) -> AppResult<()> {
        info!(
            session = %self.connection_session,
            "MCP stdio transport ready - listening on stdin/stdout"
        );
        let stdout = Arc::new(Mutex::new(tokio::io::stdout()));
        self.serve(tokio::io::stdin(), stdout).await
    }

    /// Serve newline-delimited requests from `reader`, writing responses to `writer`.
    ///
    /// Returns once the reader is exhausted and every in-flight request has answered.
    /// Undecodable lines are answered with an error and reading continues.
    ///
    /// # Errors
    /// Returns an error if the reader itself fails or a response cannot be written
    pub async fn serve<R, W>(&self, reader: R, writer: Arc<Mutex<W>>) -> AppResult<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let processor = Arc::new(McpRequestProcessor::new(
            Arc::clone(&self.resources),
            self.connection_session.clone(),
        ));
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();
        let mut in_flight = JoinSet::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }

            match decode_request(&buf) {
                Frame::Blank => {}
                Frame::Request(request) => {
                    let processor = Arc::clone(&processor);
                    let writer = Arc::clone(&writer);
                    in_flight.spawn(async move {
                        if let Some(response) = processor.handle_request(request).await {
                            if let Err(e) = write_response(&response, &writer).await {
                                warn!("Failed to write MCP response: {}", e);
                            }
                        }
                    });
                }
                Frame::Rejected(response) => write_response(&response, &writer).await?,
            }

            while let Some(joined) = in_flight.try_join_next() {
                if let Err(e) = joined {
                    warn!("MCP request task failed: {}", e);
                }
            }
        }

        debug!(pending = in_flight.len(), "Input closed, draining in-flight requests");
        while let Some(joined) = in_flight.join_next().await {
            if let Err(e) = joined {
                warn!("MCP request task failed: {}", e);
            }
        }
        info!("MCP stdio transport finished");
        Ok(())
    }
}

/// One input line, classified
enum Frame {
    /// Whitespace only
    Blank,
    /// A well-formed request to process
    Request(JsonRpcRequest),
    /// A line answered immediately with an error
    Rejected(JsonRpcResponse),
}

/// Classify one raw line.
///
/// Bytes that are not UTF-8 or not JSON get -32700 with a null id. JSON that
/// is not a request object gets -32600, echoing its `id` when one is present.
fn decode_request(raw: &[u8]) -> Frame {
    let Ok(text) = std::str::from_utf8(raw) else {
        warn!("Discarding input line that is not valid UTF-8");
        return Frame::Rejected(JsonRpcResponse::error(None, ERROR_PARSE, MSG_PARSE_ERROR));
    };
    let text = text.trim();
    if text.is_empty() {
        return Frame::Blank;
    }

    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            warn!("Invalid JSON-RPC message: {}", e);
            return Frame::Rejected(JsonRpcResponse::error(None, ERROR_PARSE, MSG_PARSE_ERROR));
        }
    };
    let id = value.get("id").filter(|id| !id.is_null()).cloned();

    match serde_json::from_value::<JsonRpcRequest>(value) {
        Ok(request) => Frame::Request(request),
        Err(e) => {
            warn!("Malformed JSON-RPC request: {}", e);
            Frame::Rejected(JsonRpcResponse::error(
                id,
                ERROR_INVALID_REQUEST,
                format!("Invalid Request: {e}"),
            ))
        }
    }
}

/// Write one response as a single line
///
/// # Errors
/// Returns an error if JSON serialization fails or I/O operations fail
pub async fn write_response<W>(response: &JsonRpcResponse, writer: &Arc<Mutex<W>>) -> AppResult<()>
where
    W: AsyncWrite + Unpin,
{
    let mut line = serde_json::to_string(response)
        .map_err(|e| AppError::internal(format!("JSON serialization failed: {e}")))?;
    line.push('\n');
    debug!("Sending MCP response: {}", line.trim_end());

    let mut guard = writer.lock().await;
    guard
        .write_all(line.as_bytes())
        .await
        .map_err(|e| AppError::internal(format!("Transport error: {e}")))?;
    guard
        .flush()
        .await
        .map_err(|e| AppError::internal(format!("Transport error: {e}")))?;
    drop(guard);
    Ok(())
}
