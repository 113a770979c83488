//! Bounded store of recent transcriptions
//!
//! Persisted as a JSON array of `[word, transcription]` pairs, oldest first.
//! The whole file is rewritten after every successful transcription.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// One remembered transcription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct HistoryEntry {
    /// Word as the user typed it
    pub word: String,
    /// Bracketed transcription
    pub transcription: String,
}

impl From<(String, String)> for HistoryEntry {
    fn from((word, transcription): (String, String)) -> Self {
        Self {
            word,
            transcription,
        }
    }
}

impl From<HistoryEntry> for (String, String) {
    fn from(entry: HistoryEntry) -> Self {
        (entry.word, entry.transcription)
    }
}

/// Most recent transcriptions, capped at `capacity`
#[derive(Debug)]
pub struct History {
    path: PathBuf,
    capacity: usize,
    entries: VecDeque<HistoryEntry>,
}

impl History {
    /// Number of entries kept by default
    pub const DEFAULT_CAPACITY: usize = 5;

    /// Load from `path`; a missing file is an empty history
    pub fn load(path: impl Into<PathBuf>, capacity: usize) -> Result<Self> {
        let path = path.into();
        let capacity = capacity.max(1);

        let entries: Vec<HistoryEntry> = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Vec::new(),
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| CliError::CorruptHistory(format!("{}: {e}", path.display())))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read history: {}", path.display()))
            }
        };

        // Keep only the newest entries if the file outgrew the capacity
        let skip = entries.len().saturating_sub(capacity);
        let entries = entries.into_iter().skip(skip).collect();

        Ok(Self {
            path,
            capacity,
            entries,
        })
    }

    /// Remember a transcription, evicting the oldest entry when full
    pub fn push(&mut self, word: impl Into<String>, transcription: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry {
            word: word.into(),
            transcription: transcription.into(),
        });
    }

    /// Rewrite the history file
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let json = serde_json::to_string(&self.entries)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write history: {}", self.path.display()))?;

        log::debug!(
            "Saved {} history entries to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Entries, most recent first
    pub fn recent(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
