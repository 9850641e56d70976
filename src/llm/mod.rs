// ABOUTME: Completion client abstraction for the hosted recipe-generation backends
// ABOUTME: Defines the CompletionClient trait, the typed failure kinds and shared HTTP plumbing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Completion Clients
//!
//! One trait, one adapter per backend. A client sends a single prompt and
//! returns the raw text of the model's reply, or a [`CompletionError`] that
//! says which of three things went wrong. Calls are never retried here.
//!
//! ## Example
//!
//! ```rust,no_run
//! use recipe_mcp_server::config::{CompletionConfig, CompletionProviderType};
//! use recipe_mcp_server::llm::{CompletionClient, CompletionProvider};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CompletionConfig::new(CompletionProviderType::Cohere, "api-key");
//! let client = CompletionProvider::from_config(&config)?;
//! let text = client.complete("Suggest 3 recipes with eggs").await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

mod cohere;
mod gemini;
mod provider;
pub mod response;

pub use cohere::CohereClient;
pub use gemini::GeminiClient;
pub use provider::CompletionProvider;

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::errors::{AppError, ErrorCode};

/// Longest response excerpt copied into an error message
const ERROR_BODY_PREVIEW_CHARS: usize = 200;

/// Failure category of a completion call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionErrorKind {
    /// Transport failure or timeout
    NetworkFailure,
    /// Non-success status, unreadable body or an error payload
    BackendError,
    /// Well-formed response without usable text
    EmptyResponse,
}

impl Display for CompletionErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::NetworkFailure => write!(f, "network_failure"),
            Self::BackendError => write!(f, "backend_error"),
            Self::EmptyResponse => write!(f, "empty_response"),
        }
    }
}

/// Why a completion call produced no text
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The request never got a response (DNS, connect, TLS, timeout)
    #[error("{provider} request failed: {message}")]
    NetworkFailure {
        /// Backend name
        provider: &'static str,
        /// Transport error description
        message: String,
    },
    /// The backend answered but signalled an error
    #[error("{provider} returned an error{}: {message}", .status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    BackendError {
        /// Backend name
        provider: &'static str,
        /// HTTP status when the failure was a non-success status
        status: Option<u16>,
        /// Error description from the backend
        message: String,
    },
    /// The backend answered successfully but with no text
    #[error("{provider} returned no completion text")]
    EmptyResponse {
        /// Backend name
        provider: &'static str,
    },
}

impl CompletionError {
    /// Failure category
    #[must_use]
    pub const fn kind(&self) -> CompletionErrorKind {
        match self {
            Self::NetworkFailure { .. } => CompletionErrorKind::NetworkFailure,
            Self::BackendError { .. } => CompletionErrorKind::BackendError,
            Self::EmptyResponse { .. } => CompletionErrorKind::EmptyResponse,
        }
    }

    /// Backend that produced the failure
    #[must_use]
    pub const fn provider(&self) -> &'static str {
        match self {
            Self::NetworkFailure { provider, .. }
            | Self::BackendError { provider, .. }
            | Self::EmptyResponse { provider } => provider,
        }
    }
}

impl From<CompletionError> for AppError {
    fn from(error: CompletionError) -> Self {
        let code = match &error {
            CompletionError::NetworkFailure { .. } => ErrorCode::ExternalServiceUnavailable,
            CompletionError::BackendError {
                status: Some(401 | 403),
                ..
            } => ErrorCode::ExternalAuthFailed,
            CompletionError::BackendError {
                status: Some(429), ..
            } => ErrorCode::ExternalRateLimited,
            CompletionError::BackendError { .. } | CompletionError::EmptyResponse { .. } => {
                ErrorCode::ExternalServiceError
            }
        };
        Self::new(code, error.to_string())
    }
}

/// Sends one prompt to a hosted model and returns the reply text
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Short backend identifier used in logs and errors
    fn name(&self) -> &'static str;

    /// Model the client sends requests to
    fn model(&self) -> &str;

    /// Send `prompt` and return the model's raw reply text
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// Build the shared HTTP client with a whole-request timeout
///
/// # Errors
///
/// Returns a configuration error if the TLS backend cannot be initialized
pub fn build_http_client(timeout: Duration) -> Result<Client, AppError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))
}

/// Send a prepared request and extract the reply text from any known shape
pub(crate) async fn send_for_text(
    provider: &'static str,
    request: RequestBuilder,
) -> Result<String, CompletionError> {
    let response = request.send().await.map_err(|e| {
        warn!(provider, timeout = e.is_timeout(), error = %e, "Completion request failed");
        CompletionError::NetworkFailure {
            provider,
            message: if e.is_timeout() {
                "request timed out".to_owned()
            } else {
                e.to_string()
            },
        }
    })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| {
        // A timeout while streaming the body is still a transport problem
        if e.is_timeout() {
            CompletionError::NetworkFailure {
                provider,
                message: "request timed out".to_owned(),
            }
        } else {
            CompletionError::BackendError {
                provider,
                status: Some(status.as_u16()),
                message: format!("failed to read response body: {e}"),
            }
        }
    })?;

    if !status.is_success() {
        error!(provider, status = %status, "Completion backend returned an error status");
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .as_ref()
            .and_then(response::error_message)
            .unwrap_or_else(|| preview(&body));
        return Err(CompletionError::BackendError {
            provider,
            status: Some(status.as_u16()),
            message,
        });
    }

    let payload: serde_json::Value =
        serde_json::from_str(&body).map_err(|e| CompletionError::BackendError {
            provider,
            status: Some(status.as_u16()),
            message: format!("response is not JSON: {e}"),
        })?;

    if let Some(text) = response::extract_completion_text(&payload) {
        debug!(provider, chars = text.chars().count(), "Completion received");
        return Ok(text.to_owned());
    }

    Err(response::error_message(&payload).map_or(
        CompletionError::EmptyResponse { provider },
        |message| CompletionError::BackendError {
            provider,
            status: Some(status.as_u16()),
            message,
        },
    ))
}

fn preview(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_owned();
    }
    trimmed.chars().take(ERROR_BODY_PREVIEW_CHARS).collect()
}
