// ABOUTME: Completion provider selector built from the server configuration
// ABOUTME: Wraps the Cohere and Gemini clients behind one CompletionClient implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use tracing::info;

use super::{CohereClient, CompletionClient, CompletionError, GeminiClient};
use crate::config::{CompletionConfig, CompletionProviderType};
use crate::errors::AppError;

/// Completion client chosen at startup
#[derive(Debug)]
pub enum CompletionProvider {
    /// Cohere chat endpoint
    Cohere(CohereClient),
    /// Google Gemini endpoint
    Gemini(GeminiClient),
}

impl CompletionProvider {
    /// Create the client selected in `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn from_config(config: &CompletionConfig) -> Result<Self, AppError> {
        let provider = match config.provider {
            CompletionProviderType::Cohere => Self::Cohere(CohereClient::new(config)?),
            CompletionProviderType::Gemini => Self::Gemini(GeminiClient::new(config)?),
        };
        info!(
            provider = provider.name(),
            model = provider.model(),
            "Completion provider initialized (set {} to change)",
            CompletionProviderType::ENV_VAR
        );
        Ok(provider)
    }

    fn inner(&self) -> &dyn CompletionClient {
        match self {
            Self::Cohere(client) => client,
            Self::Gemini(client) => client,
        }
    }
}

#[async_trait]
impl CompletionClient for CompletionProvider {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn model(&self) -> &str {
        self.inner().model()
    }

    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.inner().complete(prompt).await
    }
}
