// ABOUTME: Centralized resource container shared by every request handler and tool
// ABOUTME: Owns the session store, recipe cache, generator, exporter and tool registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources
//!
//! Built once at startup and shared behind an `Arc`. Everything in here is
//! either immutable or internally synchronized, so request tasks never take a
//! lock on the container itself.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::config::environment::ServerConfig;
use crate::constants::{protocol::server_name, SERVER_VERSION};
use crate::errors::AppResult;
use crate::llm::{CompletionClient, CompletionProvider};
use crate::recipes::{RecipeExporter, RecipeGenerator};
use crate::session::{IngredientJournal, RecipeCache, SessionStore};
use crate::tools::ToolRegistry;

/// Shared server resources
#[derive(Clone)]
pub struct ServerResources {
    /// Per-session preferences and ingredients
    pub sessions: Arc<SessionStore>,
    /// Per-session validated recipes
    pub recipe_cache: Arc<RecipeCache>,
    /// Generation pipeline
    pub generator: Arc<RecipeGenerator>,
    /// Text file export
    pub exporter: Arc<RecipeExporter>,
    /// Registered tools
    pub tools: Arc<ToolRegistry>,
    /// Name advertised on `initialize`
    pub server_name: String,
    /// Version advertised on `initialize`
    pub server_version: String,
}

impl ServerResources {
    /// Create resources around a completion client, exporting into `output_dir`
    #[must_use]
    pub fn new(client: Arc<dyn CompletionClient>, output_dir: impl Into<PathBuf>) -> Self {
        Self::assemble(client, output_dir.into(), None)
    }

    /// Create resources that also journal every submitted ingredient list
    #[must_use]
    pub fn with_journal(
        client: Arc<dyn CompletionClient>,
        output_dir: impl Into<PathBuf>,
        journal: IngredientJournal,
    ) -> Self {
        Self::assemble(client, output_dir.into(), Some(Arc::new(journal)))
    }

    /// Create resources from the loaded configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the completion HTTP client cannot be built
    pub fn from_config(config: &ServerConfig) -> AppResult<Self> {
        let client: Arc<dyn CompletionClient> =
            Arc::new(CompletionProvider::from_config(&config.completion)?);

        let mut resources = match &config.ingredient_log_dir {
            Some(dir) => {
                let journal = IngredientJournal::new(dir);
                info!(path = %journal.path().display(), "Ingredient journal enabled");
                Self::with_journal(client, config.output_dir.clone(), journal)
            }
            None => Self::new(client, config.output_dir.clone()),
        };
        resources.server_name.clone_from(&config.server_name);
        resources.server_version.clone_from(&config.server_version);
        Ok(resources)
    }

    fn assemble(
        client: Arc<dyn CompletionClient>,
        output_dir: PathBuf,
        journal: Option<Arc<IngredientJournal>>,
    ) -> Self {
        let sessions = Arc::new(SessionStore::new());
        let recipe_cache = Arc::new(RecipeCache::new());

        let mut generator =
            RecipeGenerator::new(client, Arc::clone(&sessions), Arc::clone(&recipe_cache));
        if let Some(journal) = journal {
            generator = generator.with_journal(journal);
        }

        Self {
            sessions,
            recipe_cache,
            generator: Arc::new(generator),
            exporter: Arc::new(RecipeExporter::new(output_dir)),
            tools: Arc::new(ToolRegistry::with_builtin_tools()),
            server_name: server_name(),
            server_version: SERVER_VERSION.to_owned(),
        }
    }
}
