// ABOUTME: Concurrent per-session preference store keyed by an opaque session key
// ABOUTME: Sessions are created implicitly on first write and read as defaults until then
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use super::preferences::{Cuisine, Language, Preferences};

#[derive(Debug, Clone, Default)]
struct SessionState {
    preferences: Preferences,
    ingredients: Option<Arc<[String]>>,
}

/// Per-session preference state.
///
/// Writes to one session take that key's shard lock only, so sessions never
/// observe each other's values. Readers get an owned snapshot.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, SessionState>,
}

impl SessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response language
    pub fn set_language(&self, session: &str, language: Language) {
        self.sessions
            .entry(session.to_owned())
            .or_default()
            .preferences
            .language = language;
        debug!(session, language = %language, "Language updated");
    }

    /// Append one allergy term. Returns false when the term was already recorded.
    pub fn add_allergy(&self, session: &str, allergy: &str) -> bool {
        let allergy = allergy.trim();
        if allergy.is_empty() {
            return false;
        }
        let mut state = self.sessions.entry(session.to_owned()).or_default();
        let allergies = &mut state.preferences.allergies;
        if allergies.iter().any(|known| known == allergy) {
            return false;
        }
        allergies.push(allergy.to_owned());
        drop(state);
        debug!(session, allergy, "Allergy recorded");
        true
    }

    /// Append several allergy terms in order, returning how many were new
    pub fn add_allergies<I, S>(&self, session: &str, allergies: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        allergies
            .into_iter()
            .filter(|allergy| self.add_allergy(session, allergy.as_ref()))
            .count()
    }

    /// Forget every recorded allergy
    pub fn clear_allergies(&self, session: &str) {
        if let Some(mut state) = self.sessions.get_mut(session) {
            state.preferences.allergies.clear();
        }
    }

    /// Set the cuisine focus
    pub fn set_cuisine(&self, session: &str, cuisine: Cuisine) {
        self.sessions
            .entry(session.to_owned())
            .or_default()
            .preferences
            .cuisine = cuisine;
        debug!(session, cuisine = cuisine.tag(), "Cuisine updated");
    }

    /// Snapshot of the session's preferences, defaults for an unknown session
    #[must_use]
    pub fn get_preferences(&self, session: &str) -> Preferences {
        self.sessions
            .get(session)
            .map(|state| state.preferences.clone())
            .unwrap_or_default()
    }

    /// Record the last submitted ingredient list
    pub fn set_ingredients(&self, session: &str, ingredients: Vec<String>) {
        self.sessions
            .entry(session.to_owned())
            .or_default()
            .ingredients = Some(ingredients.into());
    }

    /// Last submitted ingredient list
    #[must_use]
    pub fn ingredients(&self, session: &str) -> Option<Arc<[String]>> {
        self.sessions
            .get(session)
            .and_then(|state| state.ingredients.clone())
    }

    /// Number of sessions seen so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session has written anything yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_session_reads_defaults() {
        let store = SessionStore::new();
        assert_eq!(store.get_preferences("nobody"), Preferences::default());
        assert!(store.is_empty());
    }

    #[test]
    fn test_duplicate_allergies_ignored() {
        let store = SessionStore::new();
        assert!(store.add_allergy("s", "peanuts"));
        assert!(!store.add_allergy("s", " peanuts "));
        assert!(!store.add_allergy("s", ""));
        assert_eq!(store.add_allergies("s", ["shellfish", "peanuts", "milk"]), 2);
        assert_eq!(
            store.get_preferences("s").allergies,
            vec!["peanuts", "shellfish", "milk"]
        );
        store.clear_allergies("s");
        assert!(store.get_preferences("s").allergies.is_empty());
    }

    #[test]
    fn test_ingredients_replaced() {
        let store = SessionStore::new();
        assert!(store.ingredients("s").is_none());
        store.set_ingredients("s", vec!["egg".into()]);
        store.set_ingredients("s", vec!["rice".into(), "kimchi".into()]);
        assert_eq!(
            store.ingredients("s").as_deref(),
            Some(&["rice".to_owned(), "kimchi".to_owned()][..])
        );
    }
}
