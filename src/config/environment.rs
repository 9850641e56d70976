// ABOUTME: Server configuration loaded once from environment variables at startup
// ABOUTME: Completion backend credentials, generation parameters and output locations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::info;

use super::types::{CompletionProviderType, LogLevel};
use crate::recipes::export::default_output_dir;

/// Environment variable for sampling temperature
pub const TEMPERATURE_ENV_VAR: &str = "RECIPE_COMPLETION_TEMPERATURE";
/// Environment variable for the output token cap
pub const MAX_TOKENS_ENV_VAR: &str = "RECIPE_COMPLETION_MAX_TOKENS";
/// Environment variable for the request timeout in seconds
pub const TIMEOUT_ENV_VAR: &str = "RECIPE_COMPLETION_TIMEOUT_SECS";
/// Environment variable for the export directory
pub const OUTPUT_DIR_ENV_VAR: &str = "RECIPE_OUTPUT_DIR";
/// Environment variable for the ingredient journal directory
pub const INGREDIENT_LOG_DIR_ENV_VAR: &str = "RECIPE_INGREDIENT_LOG_DIR";

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Default output token cap
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Completion backend settings
#[derive(Clone)]
pub struct CompletionConfig {
    /// Which backend to call
    pub provider: CompletionProviderType,
    /// Backend credential
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// Endpoint base URL
    pub base_url: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Output token cap
    pub max_tokens: u32,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl CompletionConfig {
    /// Settings with defaults for `provider` and the given credential
    #[must_use]
    pub fn new(provider: CompletionProviderType, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
            model: provider.default_model().to_owned(),
            base_url: provider.default_base_url().to_owned(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load settings for `provider` from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the credential is missing or a numeric value does not parse
    pub fn from_env(provider: CompletionProviderType) -> Result<Self> {
        let key_var = provider.api_key_env_var();
        let api_key = env::var(key_var)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .with_context(|| format!("{key_var} must be set to use the {provider} backend"))?;

        let mut config = Self::new(provider, api_key);
        if let Some(model) = non_empty_var(CompletionProviderType::MODEL_ENV_VAR) {
            config.model = model;
        }
        if let Some(base_url) = non_empty_var(CompletionProviderType::BASE_URL_ENV_VAR) {
            base_url.trim_end_matches('/').clone_into(&mut config.base_url);
        }
        if let Some(value) = non_empty_var(TEMPERATURE_ENV_VAR) {
            config.temperature = value
                .parse()
                .with_context(|| format!("Invalid {TEMPERATURE_ENV_VAR} value: {value}"))?;
        }
        if let Some(value) = non_empty_var(MAX_TOKENS_ENV_VAR) {
            config.max_tokens = value
                .parse()
                .with_context(|| format!("Invalid {MAX_TOKENS_ENV_VAR} value: {value}"))?;
        }
        if let Some(value) = non_empty_var(TIMEOUT_ENV_VAR) {
            let secs: u64 = value
                .parse()
                .with_context(|| format!("Invalid {TIMEOUT_ENV_VAR} value: {value}"))?;
            config.timeout = Duration::from_secs(secs);
        }
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns an error when temperature, token cap or timeout is out of range
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.temperature) {
            bail!("{TEMPERATURE_ENV_VAR} must be between 0.0 and 2.0");
        }
        if self.max_tokens == 0 {
            bail!("{MAX_TOKENS_ENV_VAR} must be greater than zero");
        }
        if self.timeout.is_zero() {
            bail!("{TIMEOUT_ENV_VAR} must be greater than zero");
        }
        Ok(())
    }
}

impl Debug for CompletionConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CompletionConfig")
            .field("provider", &self.provider)
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base log level
    pub log_level: LogLevel,
    /// Completion backend settings
    pub completion: CompletionConfig,
    /// Directory recipe exports are written into
    pub output_dir: PathBuf,
    /// Directory of the ingredient journal, disabled when unset
    pub ingredient_log_dir: Option<PathBuf>,
    /// Server name advertised on `initialize`
    pub server_name: String,
    /// Server version (from Cargo.toml)
    pub server_version: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the completion credential is missing or a value is invalid
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_provider(CompletionProviderType::from_env())
    }

    /// Load configuration for an explicitly chosen provider
    ///
    /// # Errors
    ///
    /// Returns an error if the completion credential is missing or a value is invalid
    pub fn from_env_with_provider(provider: CompletionProviderType) -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            log_level: LogLevel::from_str_or_default(
                &env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            ),
            completion: CompletionConfig::from_env(provider)
                .context("Failed to load completion backend configuration")?,
            output_dir: non_empty_var(OUTPUT_DIR_ENV_VAR)
                .map_or_else(default_output_dir, PathBuf::from),
            ingredient_log_dir: non_empty_var(INGREDIENT_LOG_DIR_ENV_VAR).map(PathBuf::from),
            server_name: crate::constants::protocol::server_name(),
            server_version: crate::constants::SERVER_VERSION.to_owned(),
        };

        info!("{}", config.summary());
        Ok(config)
    }

    /// Human-readable configuration summary (no secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recipe MCP Server Configuration:\n\
             - Server: {} {}\n\
             - Log Level: {}\n\
             - Completion Provider: {}\n\
             - Model: {}\n\
             - Endpoint: {}\n\
             - Temperature: {}\n\
             - Max Tokens: {}\n\
             - Timeout: {}s\n\
             - Output Directory: {}\n\
             - Ingredient Journal: {}",
            self.server_name,
            self.server_version,
            self.log_level,
            self.completion.provider,
            self.completion.model,
            self.completion.base_url,
            self.completion.temperature,
            self.completion.max_tokens,
            self.completion.timeout.as_secs(),
            self.output_dir.display(),
            self.ingredient_log_dir
                .as_ref()
                .map_or_else(|| "Disabled".to_owned(), |dir| dir.display().to_string()),
        )
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
