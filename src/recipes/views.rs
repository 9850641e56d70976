// ABOUTME: Text renderings of cached recipes: summary list, expanded view and export document
// ABOUTME: Labels are localized by the session language, missing fields render as gaps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;

use crate::session::preferences::Language;

use super::models::{format_amount, CookingTime, Difficulty, Recipe};

/// Footer appended to the summary list
pub const FOLLOW_UP_HINT: &str = "(Use `expand_recipe` or `save_recipe` tool for more!)";

/// Per-language labels used by the chat views
struct ViewLabels {
    recipe: &'static str,
    ingredients: &'static str,
    time: &'static str,
    minutes: &'static str,
    difficulty: &'static str,
    estimated_cost: &'static str,
    unknown: &'static str,
    steps: &'static str,
}

const KOREAN_LABELS: ViewLabels = ViewLabels {
    recipe: "레시피",
    ingredients: "재료",
    time: "시간",
    minutes: "분",
    difficulty: "난이도",
    estimated_cost: "예상 비용",
    unknown: "알 수 없음",
    steps: "조리 순서",
};

const ENGLISH_LABELS: ViewLabels = ViewLabels {
    recipe: "Recipe",
    ingredients: "Ingredients",
    time: "Time",
    minutes: " minutes",
    difficulty: "Difficulty",
    estimated_cost: "Estimated Cost",
    unknown: "Unknown",
    steps: "Steps",
};

const fn labels(language: Language) -> &'static ViewLabels {
    match language {
        Language::Ko => &KOREAN_LABELS,
        Language::En => &ENGLISH_LABELS,
    }
}

fn time_text(time: Option<&CookingTime>, labels: &ViewLabels) -> String {
    match time {
        Some(CookingTime::Minutes(minutes)) => {
            format!("{}{}", format_amount(*minutes), labels.minutes)
        }
        Some(CookingTime::Text(text)) => text.clone(),
        None => String::new(),
    }
}

fn difficulty_text(difficulty: Option<&Difficulty>) -> String {
    difficulty.map(ToString::to_string).unwrap_or_default()
}

/// Short view of one recipe, numbered from 1
#[must_use]
pub fn summary(position: usize, recipe: &Recipe, language: Language) -> String {
    let labels = labels(language);
    format!(
        "🍲 {} {position}: {}\n🛒 {}: {}\n⏱️ {}: {} / {}: {}\n",
        labels.recipe,
        recipe.name,
        labels.ingredients,
        recipe.ingredient_names(),
        labels.time,
        time_text(recipe.time.as_ref(), labels),
        labels.difficulty,
        difficulty_text(recipe.difficulty.as_ref()),
    )
}

/// Summaries of a whole collection followed by the follow-up hint
#[must_use]
pub fn summary_list(recipes: &[Recipe], language: Language) -> String {
    let mut text = recipes
        .iter()
        .enumerate()
        .map(|(offset, recipe)| summary(offset + 1, recipe, language))
        .collect::<Vec<_>>()
        .join("\n\n");
    text.push_str("\n\n");
    text.push_str(FOLLOW_UP_HINT);
    text
}

/// Detailed view: name, cost, time, difficulty and numbered steps
#[must_use]
pub fn expanded(recipe: &Recipe, language: Language) -> String {
    let labels = labels(language);
    let cost = recipe
        .total_cost
        .map_or_else(|| labels.unknown.to_owned(), format_amount);

    let mut text = format!(
        "📋 {}: \"{}\"\n💰 {}: {cost}\n⏱️ {}: {} / {}: {}\n\n🧑‍🍳 {}:",
        labels.recipe,
        recipe.name,
        labels.estimated_cost,
        labels.time,
        time_text(recipe.time.as_ref(), labels),
        labels.difficulty,
        difficulty_text(recipe.difficulty.as_ref()),
        labels.steps,
    );
    for (offset, step) in recipe.steps.iter().enumerate() {
        let _ = write!(text, "\n  {}. {step}", offset + 1);
    }
    text
}

/// Body of the exported text file
#[must_use]
pub fn export_document(recipe: &Recipe) -> String {
    let time = time_text(recipe.time.as_ref(), &ENGLISH_LABELS);
    let difficulty = match &recipe.difficulty {
        Some(Difficulty::Level(level)) => format!("{level}/{}", Difficulty::MAX_LEVEL),
        Some(Difficulty::Label(label)) => label.clone(),
        None => String::new(),
    };

    let mut text = format!(
        "Recipe: {}\nTime: {time}\nDifficulty: {difficulty}\n\nIngredients:",
        recipe.name
    );
    for ingredient in &recipe.ingredients {
        match ingredient.price() {
            Some(price) => {
                let _ = write!(text, "\n- {} ({}₩)", ingredient.name(), format_amount(price));
            }
            None => {
                let _ = write!(text, "\n- {}", ingredient.name());
            }
        }
    }
    if let Some(total) = recipe.total_cost {
        let _ = write!(text, "\n\nTotal Cost: {}₩", format_amount(total));
    }
    text.push_str("\n\nSteps:");
    for (offset, step) in recipe.steps.iter().enumerate() {
        let _ = write!(text, "\n{}. {step}", offset + 1);
    }
    text.push('\n');
    text
}
