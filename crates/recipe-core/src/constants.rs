// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Protocol values, JSON-RPC error codes, tool identifiers and field names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// JSON-RPC and MCP protocol constants
pub mod protocol {
    use std::env;

    /// JSON-RPC version (standard, not configurable)
    pub const JSONRPC_VERSION: &str = "2.0";

    /// Default MCP protocol version advertised on `initialize`
    pub const DEFAULT_MCP_PROTOCOL_VERSION: &str = "2025-06-18";

    /// Default server name advertised on `initialize`
    pub const DEFAULT_SERVER_NAME: &str = "recipe-mcp-server";

    /// Get MCP protocol version from environment or default
    #[must_use]
    pub fn mcp_protocol_version() -> String {
        env::var("MCP_PROTOCOL_VERSION").unwrap_or_else(|_| DEFAULT_MCP_PROTOCOL_VERSION.into())
    }

    /// Get server name from environment or default
    #[must_use]
    pub fn server_name() -> String {
        env::var("SERVER_NAME").unwrap_or_else(|_| DEFAULT_SERVER_NAME.into())
    }
}

/// Error codes for JSON-RPC and MCP protocols
pub mod errors {
    /// Invalid JSON was received
    pub const ERROR_PARSE: i32 = -32700;

    /// The JSON sent is not a valid request object
    pub const ERROR_INVALID_REQUEST: i32 = -32600;

    /// Method not found
    pub const ERROR_METHOD_NOT_FOUND: i32 = -32601;

    /// Invalid parameters
    pub const ERROR_INVALID_PARAMS: i32 = -32602;

    /// Internal error
    pub const ERROR_INTERNAL_ERROR: i32 = -32603;

    /// Message sent with [`ERROR_PARSE`]
    pub const MSG_PARSE_ERROR: &str = "Parse error";
}

/// MCP tool identifiers
pub mod tools {
    /// Switch the reply language between Korean and English
    pub const SET_LANGUAGE: &str = "set_language";
    /// Record one allergen
    pub const INPUT_ALLERGY: &str = "input_allergy";
    /// Record several allergens at once
    pub const FOOD_ALLERGIES: &str = "food_allergies";
    /// Forget every recorded allergen
    pub const CLEAR_ALLERGIES: &str = "clear_allergies";
    /// Choose the cuisine
    pub const TYPE_FOOD: &str = "type_food";
    /// Show the current preferences
    pub const GET_PREFERENCES: &str = "get_preferences";

    /// Generate recipes from ingredients and cache them
    pub const INPUT_INGREDIENTS: &str = "input_ingredients";
    /// Regenerate recipes from the ingredients submitted earlier
    pub const RECIPE_REC: &str = "recipe_rec";

    /// Show one cached recipe in full
    pub const EXPAND_RECIPE: &str = "expand_recipe";
    /// Export one cached recipe to a text file
    pub const SAVE_RECIPE: &str = "save_recipe";
}

/// JSON argument field names used in tool payloads
pub mod json_fields {
    /// Language code argument
    pub const LANG: &str = "lang";
    /// Ingredient list argument
    pub const INGREDIENTS: &str = "ingredients";
    /// Single allergen argument
    pub const ALLERGY: &str = "allergy";
    /// Allergen list argument
    pub const ALLERGIES: &str = "allergies";
    /// Cuisine tag argument
    pub const CUISINE: &str = "cuisine";
    /// 1-based recipe index argument
    pub const INDEX: &str = "index";
}

/// Pipeline limits
pub mod limits {
    /// Number of recipes requested from the model and kept per generation
    pub const RECIPES_PER_GENERATION: usize = 3;

    /// Longest MCP params preview written to debug logs
    pub const LOG_PREVIEW_CHARS: usize = 100;
}
