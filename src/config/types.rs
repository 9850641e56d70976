// ABOUTME: Core configuration type definitions for logging and completion backends
// ABOUTME: Contains LogLevel and CompletionProviderType enums with environment parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use tracing::warn;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level - only critical errors
    Error,
    /// Warning level - potential issues
    Warn,
    /// Info level - normal operational messages (default)
    #[default]
    Info,
    /// Debug level - detailed debugging information
    Debug,
    /// Trace level - very verbose tracing
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Hosted completion backend selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompletionProviderType {
    /// Cohere chat endpoint (default)
    #[default]
    Cohere,
    /// Google Gemini `generateContent` endpoint
    Gemini,
}

impl CompletionProviderType {
    /// Environment variable for provider selection
    pub const ENV_VAR: &'static str = "RECIPE_COMPLETION_PROVIDER";

    /// Environment variable for model selection
    pub const MODEL_ENV_VAR: &'static str = "RECIPE_COMPLETION_MODEL";

    /// Environment variable for endpoint base URL override
    pub const BASE_URL_ENV_VAR: &'static str = "RECIPE_COMPLETION_BASE_URL";

    /// Parse from string with fallback to default
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|e| {
            warn!("{}, falling back to {}", e, Self::default());
            Self::default()
        })
    }

    /// Load from environment variable
    #[must_use]
    pub fn from_env() -> Self {
        env::var(Self::ENV_VAR).map_or_else(|_| Self::default(), |s| Self::from_str_or_default(&s))
    }

    /// Environment variable holding this provider's credential
    #[must_use]
    pub const fn api_key_env_var(&self) -> &'static str {
        match self {
            Self::Cohere => "COHERE_API_KEY",
            Self::Gemini => "GEMINI_API_KEY",
        }
    }

    /// Model used when none is configured
    #[must_use]
    pub const fn default_model(&self) -> &'static str {
        match self {
            Self::Cohere => "command-r-plus",
            Self::Gemini => "gemini-2.5-flash",
        }
    }

    /// Endpoint base used when none is configured
    #[must_use]
    pub const fn default_base_url(&self) -> &'static str {
        match self {
            Self::Cohere => "https://api.cohere.ai",
            Self::Gemini => "https://generativelanguage.googleapis.com",
        }
    }
}

impl FromStr for CompletionProviderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cohere" => Ok(Self::Cohere),
            "gemini" | "google" => Ok(Self::Gemini),
            other => Err(format!(
                "unknown completion provider '{other}' (expected cohere or gemini)"
            )),
        }
    }
}

impl Display for CompletionProviderType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Cohere => write!(f, "cohere"),
            Self::Gemini => write!(f, "gemini"),
        }
    }
}
