// ABOUTME: Shared test utilities for the recipe server integration tests
// ABOUTME: Provides a scripted completion client, canned model replies and resource builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `recipe_mcp_server`

use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use recipe_mcp_server::llm::{CompletionClient, CompletionError};
use recipe_mcp_server::mcp::resources::ServerResources;
use recipe_mcp_server::tools::ToolExecutionContext;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Reply with the three-recipe array used across the tests
pub const KIMCHI_REPLY: &str = r#"[
  {"name": "Kimchi Fried Rice",
   "ingredients": [{"name": "Rice", "price": 3000}, {"name": "Kimchi", "price": 5000}],
   "time": "20 minutes", "difficulty": 2,
   "steps": ["Cook rice", "Fry with kimchi"],
   "total cost": 3000},
  {"name": "Kimchi Stew",
   "ingredients": ["Kimchi", "Tofu", "Pork"],
   "time": 30, "difficulty": 3,
   "steps": ["Boil water", "Add kimchi and pork", "Add tofu"]},
  {"name": "Kimchi Pancake",
   "ingredients": ["Kimchi", "Flour"],
   "time": "15 minutes", "difficulty": "Easy",
   "steps": ["Mix batter", "Pan fry"]}
]"#;

/// A one-recipe reply
pub const BIBIMBAP_REPLY: &str = r#"[{"name": "Bibimbap", "ingredients": ["Rice", "Egg"], "time": 25, "difficulty": 2, "steps": ["Cook rice", "Top with vegetables"]}]"#;

/// Completion client that answers from a script and records every prompt
#[derive(Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String, CompletionError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    /// Client that returns `replies` in order
    pub fn new<I>(replies: I) -> Arc<Self>
    where
        I: IntoIterator<Item = Result<String, CompletionError>>,
    {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Client that returns the given texts in order
    pub fn replying(texts: &[&str]) -> Arc<Self> {
        Self::new(texts.iter().map(|text| Ok((*text).to_owned())))
    }

    /// Prompts received so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.prompts.lock().unwrap().push(prompt.to_owned());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(CompletionError::EmptyResponse {
                provider: "scripted",
            }))
    }
}

/// Resources over a scripted client, exporting into `output_dir`
pub fn resources_with(client: Arc<ScriptedClient>, output_dir: &Path) -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(client, output_dir))
}

/// Tool context for `session`
pub fn context(resources: &Arc<ServerResources>, session: &str) -> ToolExecutionContext {
    ToolExecutionContext::new(session, Arc::clone(resources))
}
