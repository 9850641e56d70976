// ABOUTME: Recipe MCP server binary speaking JSON-RPC over stdin/stdout
// ABOUTME: Loads configuration, applies CLI overrides, initializes logging and runs the stdio transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe MCP Server Binary
//!
//! Stdout carries the protocol stream; every log line goes to stderr.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use recipe_mcp_server::{
    config::{environment::ServerConfig, CompletionProviderType, LogLevel},
    logging::LoggingConfig,
    mcp::{resources::ServerResources, transport_manager::StdioTransport},
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "recipe-mcp-server")]
#[command(about = "Recipe MCP Server - recipe suggestions from the ingredients you have")]
#[command(version)]
pub struct Args {
    /// Completion backend: cohere or gemini
    #[arg(long, env = "RECIPE_COMPLETION_PROVIDER")]
    provider: Option<CompletionProviderType>,

    /// Override the completion model id
    #[arg(long)]
    model: Option<String>,

    /// Directory recipe files are saved into
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::from_env();
    if let Some(level) = &args.log_level {
        logging = logging.with_level(LogLevel::from_str_or_default(level));
    }
    logging.init()?;

    let provider = args.provider.unwrap_or_default();
    let mut config = ServerConfig::from_env_with_provider(provider)?;
    if let Some(model) = args.model {
        config.completion.model = model;
    }
    if let Some(output_dir) = args.output_dir {
        config.output_dir = output_dir;
    }
    if let Some(level) = &args.log_level {
        config.log_level = LogLevel::from_str_or_default(level);
    }

    let resources = Arc::new(ServerResources::from_config(&config)?);
    let transport = StdioTransport::new(resources);
    info!(
        provider = %config.completion.provider,
        model = %config.completion.model,
        output_dir = %config.output_dir.display(),
        "Ready to suggest recipes"
    );

    tokio::select! {
        result = transport.run() => {
            if let Err(e) = result {
                error!("stdio transport failed: {}", e);
                return Err(e.into());
            }
            info!("stdin closed, shutting down");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl-C, shutting down");
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_flag_accepts_known_backends() {
        let args = Args::try_parse_from(["recipe-mcp-server", "--provider", "gemini"]).unwrap();
        assert_eq!(args.provider, Some(CompletionProviderType::Gemini));

        let args = Args::try_parse_from(["recipe-mcp-server", "--provider", "Cohere"]).unwrap();
        assert_eq!(args.provider, Some(CompletionProviderType::Cohere));
    }

    #[test]
    fn test_provider_flag_rejects_unknown_backend() {
        let error = Args::try_parse_from(["recipe-mcp-server", "--provider", "gemnii"])
            .err()
            .unwrap();
        assert_eq!(error.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(error.to_string().contains("gemnii"));
    }
}
