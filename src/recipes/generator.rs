// ABOUTME: Runs one recipe generation attempt for a session
// ABOUTME: Snapshots preferences, builds the prompt, calls the backend, validates and caches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Generator
//!
//! A generation attempt either replaces the session's cached recipes with a
//! freshly validated collection or fails and leaves the previous collection in
//! place. No session lock is held while the completion request is in flight.

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::constants::limits::LOG_PREVIEW_CHARS;
use crate::errors::{AppError, ErrorCode};
use crate::llm::{CompletionClient, CompletionError};
use crate::session::{IngredientJournal, Language, RecipeCache, SessionStore};

use super::models::Recipe;
use super::parser::{self, ParseFailure};
use super::prompt::build_prompt;

/// A successful generation
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// Validated recipes now cached for the session
    pub recipes: Arc<[Recipe]>,
    /// Language the recipes were requested in
    pub language: Language,
    /// Wall time of the whole attempt
    pub elapsed_ms: u64,
}

/// Why a generation attempt produced no recipes
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No ingredients were submitted
    #[error("no ingredients have been provided")]
    NoIngredients,
    /// Completion backend failed
    #[error(transparent)]
    Completion(#[from] CompletionError),
    /// Reply was not a usable recipe array
    #[error(transparent)]
    Parse(#[from] ParseFailure),
}

impl From<GenerationError> for AppError {
    fn from(error: GenerationError) -> Self {
        match error {
            GenerationError::NoIngredients => {
                Self::new(ErrorCode::MissingRequiredField, error.to_string())
            }
            GenerationError::Completion(inner) => inner.into(),
            GenerationError::Parse(inner) => inner.into(),
        }
    }
}

/// Orchestrates prompt, completion, validation and caching
pub struct RecipeGenerator {
    client: Arc<dyn CompletionClient>,
    sessions: Arc<SessionStore>,
    cache: Arc<RecipeCache>,
    journal: Option<Arc<IngredientJournal>>,
}

impl RecipeGenerator {
    /// Create a generator over shared session state
    #[must_use]
    pub fn new(
        client: Arc<dyn CompletionClient>,
        sessions: Arc<SessionStore>,
        cache: Arc<RecipeCache>,
    ) -> Self {
        Self {
            client,
            sessions,
            cache,
            journal: None,
        }
    }

    /// Journal every submitted ingredient list
    #[must_use]
    pub fn with_journal(mut self, journal: Arc<IngredientJournal>) -> Self {
        self.journal = Some(journal);
        self
    }

    /// Record a new ingredient list for the session and generate from it
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] when the list is empty, the backend fails
    /// or the reply does not validate.
    pub async fn generate(
        &self,
        session: &str,
        ingredients: Vec<String>,
    ) -> Result<GenerationOutcome, GenerationError> {
        let ingredients: Vec<String> = ingredients
            .into_iter()
            .map(|item| item.trim().to_owned())
            .filter(|item| !item.is_empty())
            .collect();
        if ingredients.is_empty() {
            return Err(GenerationError::NoIngredients);
        }

        if let Some(journal) = &self.journal {
            journal.record(session, &ingredients).await;
        }
        self.sessions.set_ingredients(session, ingredients.clone());
        self.run(session, &ingredients).await
    }

    /// Generate again from the session's last submitted ingredients
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::NoIngredients`] when nothing was submitted yet,
    /// otherwise the same failures as [`Self::generate`].
    pub async fn regenerate(&self, session: &str) -> Result<GenerationOutcome, GenerationError> {
        let ingredients = self
            .sessions
            .ingredients(session)
            .ok_or(GenerationError::NoIngredients)?;
        self.run(session, &ingredients).await
    }

    #[instrument(
        skip(self, ingredients),
        fields(provider = self.client.name(), ingredients = ingredients.len())
    )]
    async fn run(
        &self,
        session: &str,
        ingredients: &[String],
    ) -> Result<GenerationOutcome, GenerationError> {
        let started = Instant::now();
        let preferences = self.sessions.get_preferences(session);
        let prompt = build_prompt(
            ingredients,
            preferences.language,
            &preferences.allergies,
            preferences.cuisine,
        );
        debug!(prompt_chars = prompt.len(), "Prompt built");

        let raw = self.client.complete(&prompt).await.inspect_err(|e| {
            warn!(kind = %e.kind(), error = %e, "Completion failed, keeping previous recipes");
        })?;

        let recipes = parser::parse(&raw).inspect_err(|e| {
            let preview: String = raw.chars().take(LOG_PREVIEW_CHARS).collect();
            warn!(error = %e, reply = %preview, "Model reply rejected, keeping previous recipes");
        })?;

        let recipes = self.cache.store(session, recipes);
        let elapsed_ms = started.elapsed().as_millis() as u64;
        info!(count = recipes.len(), elapsed_ms, "Recipes generated");

        Ok(GenerationOutcome {
            recipes,
            language: preferences.language,
            elapsed_ms,
        })
    }
}
