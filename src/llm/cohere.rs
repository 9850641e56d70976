// ABOUTME: Cohere chat endpoint adapter for the completion client trait
// ABOUTME: Sends the prompt as a single chat message with bearer authentication
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Cohere Client
//!
//! Calls `POST {base}/v1/chat` with `{model, message, temperature, max_tokens}`.
//! Set `COHERE_API_KEY` to the key from the Cohere dashboard.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument};

use super::{build_http_client, send_for_text, CompletionClient, CompletionError};
use crate::config::CompletionConfig;
use crate::errors::AppError;
use crate::logging::AppLogger;

const PROVIDER_NAME: &str = "cohere";

/// Cohere chat request body
#[derive(Debug, Serialize)]
struct CohereChatRequest<'a> {
    model: &'a str,
    message: &'a str,
    temperature: f32,
    max_tokens: u32,
}

/// Cohere chat completion client
pub struct CohereClient {
    api_key: String,
    client: Client,
    endpoint: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl CohereClient {
    /// Create a client from completion settings
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(config: &CompletionConfig) -> Result<Self, AppError> {
        Ok(Self {
            api_key: config.api_key.clone(),
            client: build_http_client(config.timeout)?,
            endpoint: format!("{}/v1/chat", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    /// Full chat endpoint URL
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionClient for CohereClient {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_chars = prompt.len()))]
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let body = CohereChatRequest {
            model: &self.model,
            message: prompt,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        debug!("Sending request to Cohere chat API");
        let started = Instant::now();
        let request = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body);

        let result = send_for_text(PROVIDER_NAME, request).await;
        AppLogger::log_completion_call(
            PROVIDER_NAME,
            &self.model,
            result.is_ok(),
            started.elapsed().as_millis() as u64,
        );
        result
    }
}

impl Debug for CohereClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CohereClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
