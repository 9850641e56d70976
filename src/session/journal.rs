// ABOUTME: Optional append-only JSON-lines log of submitted ingredient lists
// ABOUTME: Each line records the session key, a UTC timestamp and the ingredients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// File name of the journal inside the configured directory
pub const JOURNAL_FILE_NAME: &str = "ingredients.jsonl";

/// One journal line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Session that submitted the list
    pub session: String,
    /// Submission time
    pub timestamp: DateTime<Utc>,
    /// Ingredients as submitted
    pub ingredients: Vec<String>,
}

/// Appends ingredient submissions to `<dir>/ingredients.jsonl`
#[derive(Debug)]
pub struct IngredientJournal {
    path: PathBuf,
    // Serializes appends so concurrent sessions never interleave a line
    write_lock: Mutex<()>,
}

impl IngredientJournal {
    /// Journal writing into `directory`
    #[must_use]
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            path: directory.as_ref().join(JOURNAL_FILE_NAME),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the journal file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory or file cannot be written.
    pub async fn append(&self, session: &str, ingredients: &[String]) -> io::Result<()> {
        let entry = JournalEntry {
            session: session.to_owned(),
            timestamp: Utc::now(),
            ingredients: ingredients.to_vec(),
        };
        let mut line = serde_json::to_string(&entry).map_err(io::Error::other)?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        debug!(session, count = ingredients.len(), "Ingredients journaled");
        Ok(())
    }

    /// Append, logging instead of failing
    pub async fn record(&self, session: &str, ingredients: &[String]) {
        if let Err(e) = self.append(session, ingredients).await {
            warn!(path = %self.path.display(), error = %e, "Failed to journal ingredients");
        }
    }

    /// Read every entry back
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or a line is malformed.
    pub async fn entries(&self) -> io::Result<Vec<JournalEntry>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).map_err(io::Error::other))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_appends_one_line_per_submission() {
        let dir = TempDir::new().unwrap();
        let journal = IngredientJournal::new(dir.path().join("logs"));

        journal.append("a", &["egg".into(), "rice".into()]).await.unwrap();
        journal.append("b", &["tofu".into()]).await.unwrap();

        let entries = journal.entries().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].session, "a");
        assert_eq!(entries[0].ingredients, vec!["egg", "rice"]);
        assert_eq!(entries[1].ingredients, vec!["tofu"]);
    }

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let journal = IngredientJournal::new(dir.path());
        assert!(journal.entries().await.unwrap().is_empty());
    }
}
