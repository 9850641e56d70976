// ABOUTME: Strict JSON validation boundary between model output and cached recipes
// ABOUTME: Decodes the whole reply as a JSON array of objects, then reads fields leniently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Parser
//!
//! Model text is untrusted. The parser accepts it only when the entire reply
//! decodes as a JSON array of objects; nothing is repaired and code fences are
//! not stripped. Individual fields are read leniently: a missing or
//! mistyped field becomes a gap in the rendered recipe, never a failure.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::constants::limits::RECIPES_PER_GENERATION;
use crate::errors::{AppError, ErrorCode};

use super::models::{CookingTime, Difficulty, Ingredient, Recipe};

/// Accepted spellings of the total cost key
const TOTAL_COST_KEYS: [&str; 3] = ["total cost", "totalCost", "total_cost"];

/// Why a model reply could not be turned into recipes
#[derive(Debug, Error)]
pub enum ParseFailure {
    /// Reply is not valid JSON, or not an array of objects
    #[error("reply is not a JSON array of recipe objects: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// Reply decoded to an empty array
    #[error("reply contained no recipes")]
    Empty,
}

impl From<ParseFailure> for AppError {
    fn from(failure: ParseFailure) -> Self {
        Self::new(ErrorCode::InvalidFormat, failure.to_string())
    }
}

/// Parse a raw model reply into at most three recipes
///
/// # Errors
///
/// Returns [`ParseFailure::InvalidJson`] when the reply is not exactly a JSON
/// array of objects, and [`ParseFailure::Empty`] when the array is empty.
pub fn parse(raw: &str) -> Result<Vec<Recipe>, ParseFailure> {
    let objects: Vec<Map<String, Value>> = serde_json::from_str(raw)?;
    if objects.is_empty() {
        return Err(ParseFailure::Empty);
    }

    Ok(objects
        .iter()
        .take(RECIPES_PER_GENERATION)
        .map(recipe_from_object)
        .collect())
}

fn recipe_from_object(object: &Map<String, Value>) -> Recipe {
    Recipe {
        name: object
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_default(),
        ingredients: object
            .get("ingredients")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(ingredient_from_value).collect())
            .unwrap_or_default(),
        time: object.get("time").and_then(time_from_value),
        difficulty: object.get("difficulty").and_then(difficulty_from_value),
        steps: object
            .get("steps")
            .and_then(Value::as_array)
            .map(|steps| steps.iter().filter_map(text_from_value).collect())
            .unwrap_or_default(),
        total_cost: TOTAL_COST_KEYS
            .iter()
            .find_map(|key| object.get(*key))
            .and_then(number_from_value),
    }
}

fn ingredient_from_value(value: &Value) -> Option<Ingredient> {
    match value {
        Value::String(name) => Some(Ingredient::PlainName(name.clone())),
        Value::Object(fields) => {
            let name = fields.get("name").and_then(Value::as_str)?.to_owned();
            Some(match fields.get("price").and_then(number_from_value) {
                Some(price) => Ingredient::Priced { name, price },
                None => Ingredient::PlainName(name),
            })
        }
        _ => None,
    }
}

fn time_from_value(value: &Value) -> Option<CookingTime> {
    match value {
        Value::Number(number) => number.as_f64().map(CookingTime::Minutes),
        Value::String(text) if !text.trim().is_empty() => Some(CookingTime::Text(text.clone())),
        _ => None,
    }
}

fn difficulty_from_value(value: &Value) -> Option<Difficulty> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|level| level.round() as i64))
            .map(Difficulty::from_level),
        Value::String(text) if !text.trim().is_empty() => Some(Difficulty::from_text(text)),
        _ => None,
    }
}

/// Numbers are taken as-is; numeric strings such as "4000" or "4,000" are accepted too
fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().replace(',', "").parse().ok(),
        _ => None,
    }
}

fn text_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
