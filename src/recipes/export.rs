// ABOUTME: Writes a cached recipe to a plain-text file in the configured output directory
// ABOUTME: Derives a filesystem-safe file name from the recipe name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use tokio::fs;
use tracing::{debug, info};

use crate::errors::{AppError, ErrorCode};

use super::models::Recipe;
use super::views;

/// Name of the export folder created under the desktop directory
pub const DEFAULT_FOLDER_NAME: &str = "Generated Recipes";

/// File name used when nothing usable remains after sanitizing
const FALLBACK_FILE_STEM: &str = "recipe";

static WHITESPACE_RUNS: OnceLock<Option<Regex>> = OnceLock::new();
static PATH_HOSTILE: OnceLock<Option<Regex>> = OnceLock::new();

/// Export write failures. The cached recipe is never touched.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Output directory could not be created
    #[error("failed to create output directory {path}: {source}")]
    CreateDirectory {
        /// Directory that was being created
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// File could not be written
    #[error("failed to write recipe file {path}: {source}")]
    Write {
        /// File that was being written
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
}

impl From<ExportError> for AppError {
    fn from(error: ExportError) -> Self {
        let message = error.to_string();
        Self::new(ErrorCode::StorageError, message).with_source(error)
    }
}

/// Default export directory: `<desktop>/Generated Recipes`, falling back to
/// `<home>/Desktop` and then the working directory
#[must_use]
pub fn default_output_dir() -> PathBuf {
    dirs::desktop_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Desktop")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_FOLDER_NAME)
}

/// Turn a recipe name into `<name>.txt`.
///
/// Whitespace runs become a single `_` and path separators, reserved
/// characters and control characters become `_`.
#[must_use]
pub fn sanitize_file_name(recipe_name: &str) -> String {
    let trimmed = recipe_name.trim();

    let collapsed = WHITESPACE_RUNS
        .get_or_init(|| Regex::new(r"\s+").ok())
        .as_ref()
        .map_or_else(
            || trimmed.replace(char::is_whitespace, "_"),
            |re| re.replace_all(trimmed, "_").into_owned(),
        );

    let safe = PATH_HOSTILE
        .get_or_init(|| Regex::new(r#"[/\\:*?"<>|\x00-\x1F]"#).ok())
        .as_ref()
        .map_or_else(
            || collapsed.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_"),
            |re| re.replace_all(&collapsed, "_").into_owned(),
        );

    let stem = if safe.is_empty() || safe.chars().all(|c| c == '.') {
        FALLBACK_FILE_STEM.to_owned()
    } else {
        safe
    };
    format!("{stem}.txt")
}

/// Writes recipe documents into one output directory
#[derive(Debug, Clone)]
pub struct RecipeExporter {
    output_dir: PathBuf,
}

impl RecipeExporter {
    /// Create an exporter writing into `output_dir`
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Directory files are written into
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write the recipe and return the file path
    ///
    /// # Errors
    ///
    /// Returns an [`ExportError`] if the directory cannot be created or the
    /// file cannot be written.
    pub async fn export(&self, recipe: &Recipe) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|source| ExportError::CreateDirectory {
                path: self.output_dir.clone(),
                source,
            })?;

        let path = self.output_dir.join(sanitize_file_name(&recipe.name));
        debug!(path = %path.display(), "Writing recipe export");

        fs::write(&path, views::export_document(recipe))
            .await
            .map_err(|source| ExportError::Write {
                path: path.clone(),
                source,
            })?;

        info!(recipe = %recipe.name, path = %path.display(), "Recipe exported");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(sanitize_file_name("Kimchi Fried Rice"), "Kimchi_Fried_Rice.txt");
        assert_eq!(sanitize_file_name("  Kimchi \t  Stew "), "Kimchi_Stew.txt");
    }

    #[test]
    fn test_path_hostile_characters_replaced() {
        assert_eq!(sanitize_file_name("../etc/passwd"), ".._etc_passwd.txt");
        assert_eq!(sanitize_file_name("A: B?"), "A__B_.txt");
        assert_eq!(sanitize_file_name("김치찌개"), "김치찌개.txt");
    }

    #[test]
    fn test_empty_name_falls_back() {
        assert_eq!(sanitize_file_name("   "), "recipe.txt");
        assert_eq!(sanitize_file_name(".."), "recipe.txt");
    }
}
