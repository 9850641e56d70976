// ABOUTME: Module containing all MCP tool implementations organized by category
// ABOUTME: Provides factory functions that build each category's tool set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Implementations
//!
//! - `preferences` - Session preferences (language, allergies, cuisine)
//! - `generation` - Recipe generation through the completion backend
//! - `recipes` - Expansion and export of cached recipes

use std::sync::Arc;

use super::traits::McpTool;

// Preference tools: set_language, input_allergy, food_allergies, clear_allergies, type_food, get_preferences
pub mod preferences;

// Generation tools: input_ingredients, recipe_rec
pub mod generation;

// Cached recipe tools: expand_recipe, save_recipe
pub mod recipes;

/// Preference tools in registration order
#[must_use]
pub fn create_preference_tools() -> Vec<Arc<dyn McpTool>> {
    vec![
        Arc::new(preferences::SetLanguageTool),
        Arc::new(preferences::InputAllergyTool),
        Arc::new(preferences::FoodAllergiesTool),
        Arc::new(preferences::ClearAllergiesTool),
        Arc::new(preferences::TypeFoodTool),
        Arc::new(preferences::GetPreferencesTool),
    ]
}

/// Generation tools in registration order
#[must_use]
pub fn create_generation_tools() -> Vec<Arc<dyn McpTool>> {
    vec![
        Arc::new(generation::InputIngredientsTool),
        Arc::new(generation::RecipeRecTool),
    ]
}

/// Cached recipe tools in registration order
#[must_use]
pub fn create_recipe_tools() -> Vec<Arc<dyn McpTool>> {
    vec![
        Arc::new(recipes::ExpandRecipeTool),
        Arc::new(recipes::SaveRecipeTool),
    ]
}
