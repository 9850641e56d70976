// ABOUTME: Google Gemini generateContent adapter for the completion client trait
// ABOUTME: Sends the prompt as one user turn with the key passed as a query parameter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Gemini Client
//!
//! Calls `POST {base}/v1beta/models/{model}:generateContent`.
//! Set `GEMINI_API_KEY` with a key from Google AI Studio.

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

const PROVIDER_NAME: &str = "gemini";

/// Gemini API request structure
#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    generation_config: GenerationConfig,
}

/// Content structure for Gemini API
#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    role: &'static str,
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

/// Generation configuration
#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    candidate_count: u32,
}

/// Google Gemini completion client
pub struct GeminiClient {
    api_key: String,
    client: Client,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GeminiClient {
    /// Create a client from completion settings
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(config: &CompletionConfig) -> Result<Self, AppError> {
        Ok(Self {
            api_key: config.api_key.clone(),
            client: build_http_client(config.timeout)?,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    /// Endpoint URL without the credential
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_chars = prompt.len()))]
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![TextPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_tokens,
                candidate_count: 1,
            },
        };

        debug!("Sending request to Gemini API");
        let started = Instant::now();
        let request = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
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

impl Debug for GeminiClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            // Omit `client` field as HTTP clients are not useful to debug
            .finish_non_exhaustive()
    }
}
