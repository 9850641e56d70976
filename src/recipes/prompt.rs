// ABOUTME: Builds the completion prompt for a recipe generation request
// ABOUTME: Pure function of ingredients, language, allergies and cuisine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Prompt
//!
//! The prompt is assembled from fixed fragments (loaded at compile time) and
//! the request's preference snapshot. Identical inputs always produce a
//! byte-identical prompt.

use std::fmt::Write as _;

use crate::constants::limits::RECIPES_PER_GENERATION;
use crate::session::preferences::{Cuisine, Language};

/// Field list with the whole-unit pricing rules
const PRICING_INSTRUCTIONS: &str = include_str!("prompts/pricing.md");

/// JSON array shape the parser expects; `{count}` is the recipe count
const OUTPUT_FORMAT_INSTRUCTIONS: &str = include_str!("prompts/output_format.md");

/// Placeholder in the output format fragment
const COUNT_PLACEHOLDER: &str = "{count}";

/// Build the prompt sent to the completion backend.
///
/// The allergen clause is emitted only when `allergies` is non-empty and lists
/// every term verbatim. The cuisine clause is emitted only for a non-default
/// cuisine.
#[must_use]
pub fn build_prompt(
    ingredients: &[String],
    language: Language,
    allergies: &[String],
    cuisine: Cuisine,
) -> String {
    let mut prompt = String::with_capacity(
        PRICING_INSTRUCTIONS.len() + OUTPUT_FORMAT_INSTRUCTIONS.len() + 512,
    );
    let name = cuisine.english_name();

    // Writing into a String cannot fail
    let _ = writeln!(prompt, "You are a {name} cooking expert.\n");
    let _ = writeln!(prompt, "Based on these ingredients: {}\n", ingredients.join(", "));

    if cuisine == Cuisine::default() {
        let _ = writeln!(prompt, "Suggest {RECIPES_PER_GENERATION} {name} recipes.");
    } else {
        let _ = writeln!(
            prompt,
            "Suggest {RECIPES_PER_GENERATION} {name} recipes. Focus on {name} cuisine ({}) dishes only.",
            cuisine.korean_label()
        );
    }

    if !allergies.is_empty() {
        let _ = writeln!(
            prompt,
            "The user is allergic to: {}. Exclude these allergens entirely and never use them as an ingredient.",
            allergies.join(", ")
        );
    }

    prompt.push('\n');
    prompt.push_str(PRICING_INSTRUCTIONS);
    prompt.push('\n');
    let _ = writeln!(prompt, "Respond in {}.", language.english_name());
    prompt.push_str(
        &OUTPUT_FORMAT_INSTRUCTIONS
            .replace(COUNT_PLACEHOLDER, &RECIPES_PER_GENERATION.to_string()),
    );
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredients() -> Vec<String> {
        vec!["eggs".into(), "kimchi".into(), "rice".into()]
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let allergies = vec!["peanuts".to_owned()];
        let first = build_prompt(&ingredients(), Language::En, &allergies, Cuisine::Japanese);
        let second = build_prompt(&ingredients(), Language::En, &allergies, Cuisine::Japanese);
        assert_eq!(first, second);
    }

    #[test]
    fn test_ingredients_joined_in_order() {
        let prompt = build_prompt(&ingredients(), Language::Ko, &[], Cuisine::Korean);
        assert!(prompt.contains("Based on these ingredients: eggs, kimchi, rice"));
        assert!(prompt.contains("Respond in Korean."));
    }

    #[test]
    fn test_allergy_clause_only_when_present() {
        let without = build_prompt(&ingredients(), Language::En, &[], Cuisine::Korean);
        assert!(!without.contains("allergic"));

        let allergies = vec!["peanuts".to_owned(), "shellfish".to_owned()];
        let with = build_prompt(&ingredients(), Language::En, &allergies, Cuisine::Korean);
        assert!(with.contains("The user is allergic to: peanuts, shellfish."));
    }

    #[test]
    fn test_cuisine_clause_only_for_non_default() {
        let korean = build_prompt(&ingredients(), Language::En, &[], Cuisine::Korean);
        assert!(!korean.contains("Focus on"));

        let western = build_prompt(&ingredients(), Language::En, &[], Cuisine::Western);
        assert!(western.contains("Focus on Western cuisine (양식) dishes only."));
    }

    #[test]
    fn test_expert_role_follows_cuisine() {
        let korean = build_prompt(&ingredients(), Language::Ko, &[], Cuisine::Korean);
        assert!(korean.starts_with("You are a Korean cooking expert."));

        let japanese = build_prompt(&ingredients(), Language::Ko, &[], Cuisine::Japanese);
        assert!(japanese.starts_with("You are a Japanese cooking expert."));
        assert!(!japanese.contains("Korean cooking"));
    }

    #[test]
    fn test_output_format_demands_configured_count() {
        let prompt = build_prompt(&ingredients(), Language::En, &[], Cuisine::Korean);
        assert!(prompt.contains(&format!(
            "valid JSON array of exactly {RECIPES_PER_GENERATION} objects"
        )));
        assert!(!prompt.contains(COUNT_PLACEHOLDER));
    }
}
