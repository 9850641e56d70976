// ABOUTME: Recipe generation tools that call the completion backend
// ABOUTME: Implements input_ingredients and recipe_rec on top of RecipeGenerator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Generation Tools
//!
//! - `InputIngredientsTool` records an ingredient list and generates from it
//! - `RecipeRecTool` generates again from the last recorded list
//!
//! A successful generation answers with two text blocks: the validated
//! recipes as pretty-printed JSON, then the localized summary list. A failed
//! generation answers with one error block and leaves the previously cached
//! recipes untouched.

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::constants::json_fields::INGREDIENTS;
use crate::constants::tools::{INPUT_INGREDIENTS, RECIPE_REC};
use crate::errors::AppResult;
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::recipes::views;
use crate::recipes::{GenerationError, GenerationOutcome};
use crate::tools::arguments::string_list;
use crate::tools::context::ToolExecutionContext;
use crate::tools::messages;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

/// Turn a generation attempt into the tool reply
fn generation_reply(
    ctx: &ToolExecutionContext,
    attempt: Result<GenerationOutcome, GenerationError>,
) -> AppResult<ToolResult> {
    match attempt {
        Ok(outcome) => {
            let json = serde_json::to_string_pretty(&*outcome.recipes)?;
            Ok(ToolResult::texts([
                messages::recipes_json_heading(outcome.recipes.len(), &json),
                views::summary_list(&outcome.recipes, outcome.language),
            ]))
        }
        Err(error) => {
            warn!(session = %ctx.session_key, error = %error, "Recipe generation failed");
            Ok(ToolResult::error(messages::generation_failed(
                ctx.language(),
                &error,
            )))
        }
    }
}

// ============================================================================
// InputIngredientsTool
// ============================================================================

/// Tool for submitting ingredients and getting recipe suggestions
pub struct InputIngredientsTool;

#[async_trait]
impl McpTool for InputIngredientsTool {
    fn name(&self) -> &'static str {
        INPUT_INGREDIENTS
    }

    fn description(&self) -> &'static str {
        "Submit the ingredients you have and get 3 recipe suggestions that respect your language, allergies and cuisine"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object_requiring(vec![(
            INGREDIENTS,
            PropertySchema::string_array("Ingredients on hand, e.g. [\"kimchi\", \"rice\"]"),
        )])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_SESSION
            | ToolCapabilities::WRITES_SESSION
            | ToolCapabilities::CALLS_BACKEND
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let ingredients = string_list(&args, INPUT_INGREDIENTS, INGREDIENTS)?;
        let attempt = ctx
            .resources
            .generator
            .generate(&ctx.session_key, ingredients)
            .await;
        generation_reply(ctx, attempt)
    }
}

// ============================================================================
// RecipeRecTool
// ============================================================================

/// Tool for asking for fresh suggestions from the recorded ingredients
pub struct RecipeRecTool;

#[async_trait]
impl McpTool for RecipeRecTool {
    fn name(&self) -> &'static str {
        RECIPE_REC
    }

    fn description(&self) -> &'static str {
        "Suggest 3 new recipes from the ingredients submitted earlier in this session"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::empty_object()
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_SESSION
            | ToolCapabilities::WRITES_SESSION
            | ToolCapabilities::CALLS_BACKEND
    }

    async fn execute(&self, _args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let attempt = ctx.resources.generator.regenerate(&ctx.session_key).await;
        generation_reply(ctx, attempt)
    }
}
