// ABOUTME: Data models for generated recipes and the preferences that shape them
// ABOUTME: Defines Recipe, the Ingredient tagged union, CookingTime and Difficulty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// A single ingredient as returned by the model.
///
/// Some prompts ask for itemized prices and some do not, so the model answers
/// with either bare strings or `{name, price}` objects. Every rendering path
/// handles both variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Ingredient {
    /// Ingredient name without a price
    PlainName(String),
    /// Ingredient with an estimated purchase price (KRW)
    Priced {
        /// Ingredient name
        name: String,
        /// Estimated price of one purchasable unit
        price: f64,
    },
}

impl Ingredient {
    /// Ingredient name regardless of variant
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::PlainName(name) | Self::Priced { name, .. } => name,
        }
    }

    /// Price if the model itemized one
    #[must_use]
    pub const fn price(&self) -> Option<f64> {
        match self {
            Self::PlainName(_) => None,
            Self::Priced { price, .. } => Some(*price),
        }
    }
}

/// Preparation time, either as minutes or as free text ("20 minutes")
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CookingTime {
    /// Numeric minutes
    Minutes(f64),
    /// Free-form text exactly as the model wrote it
    Text(String),
}

/// Recipe difficulty.
///
/// The integer scale 1-5 is canonical. Some model answers use words
/// ("Easy", "쉬움"); those are kept verbatim as a label for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Difficulty {
    /// Level on the 1-5 scale
    Level(u8),
    /// Word label the model used instead of a level
    Label(String),
}

impl Difficulty {
    /// Lowest accepted level
    pub const MIN_LEVEL: u8 = 1;
    /// Highest accepted level
    pub const MAX_LEVEL: u8 = 5;

    /// Build a difficulty from an integer, keeping out-of-range values as labels
    #[must_use]
    pub fn from_level(level: i64) -> Self {
        match u8::try_from(level) {
            Ok(level) if (Self::MIN_LEVEL..=Self::MAX_LEVEL).contains(&level) => {
                Self::Level(level)
            }
            _ => Self::Label(level.to_string()),
        }
    }

    /// Build a difficulty from text, recognizing numeric strings such as "3"
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        text.trim()
            .parse::<i64>()
            .map_or_else(|_| Self::Label(text.to_owned()), Self::from_level)
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Level(level) => write!(f, "{level}"),
            Self::Label(label) => f.write_str(label),
        }
    }
}

/// A recipe suggested by the completion backend.
///
/// Once stored in the session cache a recipe is never mutated; expansion and
/// export only read it. Fields the model omitted stay empty and render as gaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    /// Dish name (empty if the model omitted it)
    pub name: String,
    /// Ingredients in the order the model listed them
    pub ingredients: Vec<Ingredient>,
    /// Preparation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<CookingTime>,
    /// Difficulty level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Ordered preparation steps
    pub steps: Vec<String>,
    /// Total estimated cost, present only when prices were itemized
    #[serde(rename = "total cost", skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
}

impl Recipe {
    /// Comma-joined ingredient names
    #[must_use]
    pub fn ingredient_names(&self) -> String {
        self.ingredients
            .iter()
            .map(Ingredient::name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Whether any ingredient carries a price
    #[must_use]
    pub fn has_itemized_prices(&self) -> bool {
        self.ingredients.iter().any(|i| i.price().is_some())
    }
}

/// Format a monetary or numeric amount without a trailing `.0` for whole values
#[must_use]
pub fn format_amount(amount: f64) -> String {
    if amount.fract().abs() < f64::EPSILON && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        format!("{amount}")
    }
}
