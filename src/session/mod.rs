// ABOUTME: Session-scoped state: preferences, recipe cache and ingredient journal
// ABOUTME: Everything here is keyed by the opaque session key resolved per tool call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Last validated recipe collection per session
pub mod cache;
/// Append-only ingredient submission log
pub mod journal;
/// Language, cuisine and preference snapshot types
pub mod preferences;
/// Concurrent preference store
pub mod store;

pub use cache::{LookupMiss, RecipeCache};
pub use journal::{IngredientJournal, JournalEntry};
pub use preferences::{Cuisine, Language, Preferences};
pub use store::SessionStore;
