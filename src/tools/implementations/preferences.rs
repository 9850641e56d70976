// ABOUTME: Session preference tools: language, allergies and cuisine focus
// ABOUTME: Implements set_language, input_allergy, food_allergies, clear_allergies, type_food, get_preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Preference Tools
//!
//! These tools only touch the session store. They never call the completion
//! backend, and every one of them is idempotent for repeated identical input
//! (allergies are de-duplicated).

use async_trait::async_trait;
use serde_json::Value;

use crate::constants::json_fields::{ALLERGIES, ALLERGY, CUISINE, LANG};
use crate::constants::tools::{
    CLEAR_ALLERGIES, FOOD_ALLERGIES, GET_PREFERENCES, INPUT_ALLERGY, SET_LANGUAGE, TYPE_FOOD,
};
use crate::errors::{AppResult, ToolError};
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::session::{Cuisine, Language};
use crate::tools::arguments::{required_str, string_list};
use crate::tools::context::ToolExecutionContext;
use crate::tools::messages;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

// ============================================================================
// SetLanguageTool
// ============================================================================

/// Tool for choosing the response language
pub struct SetLanguageTool;

#[async_trait]
impl McpTool for SetLanguageTool {
    fn name(&self) -> &'static str {
        SET_LANGUAGE
    }

    fn description(&self) -> &'static str {
        "Set the language for recipe suggestions and replies: 'ko' (Korean) or 'en' (English)"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object_requiring(vec![(
            LANG,
            PropertySchema::string_enum("Language code", Language::CODES),
        )])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::WRITES_SESSION
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let code = required_str(&args, SET_LANGUAGE, LANG)?;
        let language = Language::from_code(code).ok_or_else(|| {
            ToolError::invalid_parameter(SET_LANGUAGE, LANG, "expected 'ko' or 'en'")
        })?;

        ctx.resources.sessions.set_language(&ctx.session_key, language);

        Ok(ToolResult::text(messages::language_set(language)))
    }
}

// ============================================================================
// InputAllergyTool
// ============================================================================

/// Tool for adding a single allergy
pub struct InputAllergyTool;

#[async_trait]
impl McpTool for InputAllergyTool {
    fn name(&self) -> &'static str {
        INPUT_ALLERGY
    }

    fn description(&self) -> &'static str {
        "Add one food allergy. Suggested recipes will exclude it entirely."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object_requiring(vec![(
            ALLERGY,
            PropertySchema::string("Allergen to avoid, e.g. 'peanut'"),
        )])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::WRITES_SESSION
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let allergy = required_str(&args, INPUT_ALLERGY, ALLERGY)?;
        let added = ctx.resources.sessions.add_allergy(&ctx.session_key, allergy);

        Ok(ToolResult::text(messages::allergy_added(
            ctx.language(),
            allergy,
            added,
        )))
    }
}

// ============================================================================
// FoodAllergiesTool
// ============================================================================

/// Tool for adding several allergies at once
pub struct FoodAllergiesTool;

#[async_trait]
impl McpTool for FoodAllergiesTool {
    fn name(&self) -> &'static str {
        FOOD_ALLERGIES
    }

    fn description(&self) -> &'static str {
        "Add several food allergies at once. Accepts a list or a comma-separated string."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object_requiring(vec![(
            ALLERGIES,
            PropertySchema::string_array("Allergens to avoid"),
        )])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::WRITES_SESSION
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let allergies = string_list(&args, FOOD_ALLERGIES, ALLERGIES)?;
        let sessions = &ctx.resources.sessions;
        let added = sessions.add_allergies(&ctx.session_key, allergies);
        let preferences = sessions.get_preferences(&ctx.session_key);

        Ok(ToolResult::text(messages::allergies_updated(
            preferences.language,
            added,
            &preferences.allergies,
        )))
    }
}

// ============================================================================
// ClearAllergiesTool
// ============================================================================

/// Tool for emptying the allergy list
pub struct ClearAllergiesTool;

#[async_trait]
impl McpTool for ClearAllergiesTool {
    fn name(&self) -> &'static str {
        CLEAR_ALLERGIES
    }

    fn description(&self) -> &'static str {
        "Remove every recorded food allergy"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::empty_object()
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::WRITES_SESSION
    }

    async fn execute(&self, _args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        ctx.resources.sessions.clear_allergies(&ctx.session_key);
        Ok(ToolResult::text(messages::allergies_cleared(ctx.language())))
    }
}

// ============================================================================
// TypeFoodTool
// ============================================================================

/// Tool for choosing the cuisine focus
pub struct TypeFoodTool;

#[async_trait]
impl McpTool for TypeFoodTool {
    fn name(&self) -> &'static str {
        TYPE_FOOD
    }

    fn description(&self) -> &'static str {
        "Choose the cuisine for suggestions: korean (한식), chinese (중식), japanese (일식) or western (양식)"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object_requiring(vec![(
            CUISINE,
            PropertySchema::string_enum("Cuisine type", &Cuisine::accepted_values()),
        )])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::WRITES_SESSION
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let tag = required_str(&args, TYPE_FOOD, CUISINE)?;
        let cuisine = Cuisine::from_tag(tag).ok_or_else(|| {
            ToolError::invalid_parameter(
                TYPE_FOOD,
                CUISINE,
                format!("expected one of: {}", Cuisine::accepted_values().join(", ")),
            )
        })?;

        ctx.resources.sessions.set_cuisine(&ctx.session_key, cuisine);
        Ok(ToolResult::text(messages::cuisine_set(ctx.language(), cuisine)))
    }
}

// ============================================================================
// GetPreferencesTool
// ============================================================================

/// Tool for reading back the session's preferences
pub struct GetPreferencesTool;

#[async_trait]
impl McpTool for GetPreferencesTool {
    fn name(&self) -> &'static str {
        GET_PREFERENCES
    }

    fn description(&self) -> &'static str {
        "Show the current language, allergy list and cuisine for this session"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::empty_object()
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_SESSION
    }

    async fn execute(&self, _args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let preferences = ctx.resources.sessions.get_preferences(&ctx.session_key);
        let structured = serde_json::to_value(&preferences)?;

        Ok(ToolResult::text(messages::preferences_overview(&preferences))
            .with_structured(structured))
    }
}
