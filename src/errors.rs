// ABOUTME: Unified error types re-exported from recipe-core
// ABOUTME: AppError, ErrorCode and ToolError shared by every module of the server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use recipe_core::errors::*;
