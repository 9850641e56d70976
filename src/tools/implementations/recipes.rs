// ABOUTME: Tools that read one recipe from the session cache by its 1-based number
// ABOUTME: Implements expand_recipe (detailed view) and save_recipe (text file export)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use crate::constants::json_fields::INDEX;
use crate::constants::tools::{EXPAND_RECIPE, SAVE_RECIPE};
use crate::errors::AppResult;
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::recipes::views;
use crate::tools::arguments::recipe_index;
use crate::tools::context::ToolExecutionContext;
use crate::tools::messages::{self, LookupPurpose};
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

fn index_schema() -> JsonSchema {
    JsonSchema::object_requiring(vec![(
        INDEX,
        PropertySchema::string("Recipe number from the last suggestions, starting at \"1\""),
    )])
}

// ============================================================================
// ExpandRecipeTool
// ============================================================================

/// Tool for showing the full steps of one suggested recipe
pub struct ExpandRecipeTool;

#[async_trait]
impl McpTool for ExpandRecipeTool {
    fn name(&self) -> &'static str {
        EXPAND_RECIPE
    }

    fn description(&self) -> &'static str {
        "Show the estimated cost, time, difficulty and numbered steps of a suggested recipe"
    }

    fn input_schema(&self) -> JsonSchema {
        index_schema()
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_SESSION
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let index = recipe_index(&args, EXPAND_RECIPE, INDEX)?;
        let language = ctx.language();

        match ctx.resources.recipe_cache.get(&ctx.session_key, index) {
            Ok(recipe) => Ok(ToolResult::text(views::expanded(&recipe, language))),
            Err(miss) => Ok(ToolResult::error(messages::lookup_failed(
                language,
                miss,
                LookupPurpose::Expand,
            ))),
        }
    }
}

// ============================================================================
// SaveRecipeTool
// ============================================================================

/// Tool for writing one suggested recipe to a text file
pub struct SaveRecipeTool;

#[async_trait]
impl McpTool for SaveRecipeTool {
    fn name(&self) -> &'static str {
        SAVE_RECIPE
    }

    fn description(&self) -> &'static str {
        "Save a suggested recipe as a text file in the 'Generated Recipes' folder"
    }

    fn input_schema(&self) -> JsonSchema {
        index_schema()
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_SESSION | ToolCapabilities::WRITES_FILES
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let index = recipe_index(&args, SAVE_RECIPE, INDEX)?;
        let language = ctx.language();

        let recipe = match ctx.resources.recipe_cache.get(&ctx.session_key, index) {
            Ok(recipe) => recipe,
            Err(miss) => {
                return Ok(ToolResult::error(messages::lookup_failed(
                    language,
                    miss,
                    LookupPurpose::Save,
                )))
            }
        };

        match ctx.resources.exporter.export(&recipe).await {
            Ok(path) => {
                info!(session = %ctx.session_key, path = %path.display(), "Recipe saved");
                Ok(ToolResult::text(messages::recipe_saved(
                    language,
                    &recipe.name,
                    &path,
                )))
            }
            Err(error) => {
                warn!(session = %ctx.session_key, error = %error, "Recipe export failed");
                Ok(ToolResult::error(messages::save_failed(language)))
            }
        }
    }
}
