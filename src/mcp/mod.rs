// ABOUTME: Model Context Protocol (MCP) implementation for AI assistant integration
// ABOUTME: Schema types, request processing, shared resources and the stdio transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod mcp_request_processor;
pub mod resources;
pub mod schema;
pub mod transport_manager;
