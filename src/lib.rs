// ABOUTME: Main library entry point for the recipe MCP server
// ABOUTME: Exposes session, recipe pipeline, completion backend and MCP protocol modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe MCP Server
//!
//! A Model Context Protocol (MCP) server that suggests recipes from the
//! ingredients a user has on hand. A host agent records preferences
//! (language, allergies, cuisine) and ingredients through tool calls; the
//! server turns them into a prompt for a hosted language model (Cohere or
//! Gemini), validates the JSON reply, caches the recipes per session and
//! renders them for chat or writes them to a text file.
//!
//! ## Architecture
//!
//! - **Session**: per-session preferences, ingredients and recipe cache
//! - **Recipes**: prompt builder, reply parser, views, export and the generator
//! - **LLM**: the `CompletionClient` trait with Cohere and Gemini adapters
//! - **MCP**: JSON-RPC processing over a stdio transport
//! - **Tools**: the tool registry and the recipe tool set
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use recipe_mcp_server::config::environment::ServerConfig;
//! use recipe_mcp_server::mcp::resources::ServerResources;
//! use recipe_mcp_server::mcp::transport_manager::StdioTransport;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::from_config(&config)?);
//!     StdioTransport::new(resources).run().await?;
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// JSON-RPC 2.0 message types
pub mod jsonrpc;

/// Completion backend clients
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Model Context Protocol server
pub mod mcp;

/// Recipe pipeline: prompt, parse, views, export and generation
pub mod recipes;

/// Per-session state
pub mod session;

/// MCP tools
pub mod tools;
