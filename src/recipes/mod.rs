// ABOUTME: Recipe domain: models, prompt building, parsing, rendering, export and generation
// ABOUTME: Turns session preferences into validated, cached and presentable recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Writing recipes to text files
pub mod export;
/// Generation orchestration
pub mod generator;
/// Recipe data types
pub mod models;
/// Model reply validation
pub mod parser;
/// Prompt construction
pub mod prompt;
/// Text renderings
pub mod views;

pub use export::{ExportError, RecipeExporter};
pub use generator::{GenerationError, GenerationOutcome, RecipeGenerator};
pub use models::{CookingTime, Difficulty, Ingredient, Recipe};
pub use parser::{parse, ParseFailure};
pub use prompt::build_prompt;
