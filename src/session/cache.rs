// ABOUTME: Per-session cache of the last validated recipe collection
// ABOUTME: Collections are swapped wholesale and addressed by 1-based index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

use crate::errors::AppError;
use crate::recipes::Recipe;

/// Why a cache lookup returned nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupMiss {
    /// The session has no generated recipes yet
    #[error("no recipes have been generated for this session")]
    NoRecipes,
    /// The index is outside `1..=len`
    #[error("recipe number {index} is out of range (1-{available})")]
    InvalidIndex {
        /// Requested 1-based index
        index: usize,
        /// Number of cached recipes
        available: usize,
    },
}

impl From<LookupMiss> for AppError {
    fn from(miss: LookupMiss) -> Self {
        Self::not_found(miss.to_string())
    }
}

/// Last validated recipe collection per session
#[derive(Debug, Default)]
pub struct RecipeCache {
    entries: DashMap<String, Arc<[Recipe]>>,
}

impl RecipeCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the session's collection
    #[must_use]
    pub fn store(&self, session: &str, recipes: Vec<Recipe>) -> Arc<[Recipe]> {
        let recipes: Arc<[Recipe]> = recipes.into();
        self.entries.insert(session.to_owned(), Arc::clone(&recipes));
        recipes
    }

    /// Whole collection, if any
    #[must_use]
    pub fn all(&self, session: &str) -> Option<Arc<[Recipe]>> {
        self.entries.get(session).map(|entry| Arc::clone(entry.value()))
    }

    /// Recipe at a 1-based index
    ///
    /// # Errors
    ///
    /// Returns [`LookupMiss::NoRecipes`] when nothing is cached and
    /// [`LookupMiss::InvalidIndex`] when the index is out of range.
    pub fn get(&self, session: &str, index: usize) -> Result<Recipe, LookupMiss> {
        let recipes = self.all(session).ok_or(LookupMiss::NoRecipes)?;
        index
            .checked_sub(1)
            .and_then(|offset| recipes.get(offset))
            .cloned()
            .ok_or(LookupMiss::InvalidIndex {
                index,
                available: recipes.len(),
            })
    }
}
