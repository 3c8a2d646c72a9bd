//! High-score persistence
//!
//! The persisted record is an external serialization contract:
//! `{"entries": [{"name": ..., "timeSeconds": ...}]}` in insertion order.
//! Display order (ascending by time) is the consumer's business, via
//! [`HighScoreTable::sorted_by_time`].

mod error;
mod file_store;

pub use error::ScoreStoreError;
pub use file_store::FileScoreStore;

use serde::{Deserialize, Serialize};

/// One finished round: who played it and how long it took.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub name: String,
    #[serde(rename = "timeSeconds")]
    pub time_seconds: f32,
}

impl HighScoreEntry {
    pub fn new(name: &str, time_seconds: f32) -> Self {
        Self { name: name.to_string(), time_seconds }
    }
}

/// The full persisted collection, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighScoreTable {
    #[serde(default)]
    pub entries: Vec<HighScoreEntry>,
}

impl HighScoreTable {
    /// Entries ordered best-first (ascending time) for display.
    pub fn sorted_by_time(&self) -> Vec<HighScoreEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| {
            a.time_seconds
                .partial_cmp(&b.time_seconds)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        entries
    }
}

/// Narrow persistence seam the round engine records scores through.
pub trait ScoreStore {
    /// The stored table; an absent or empty store is an empty table, not an
    /// error.
    fn load(&self) -> Result<HighScoreTable, ScoreStoreError>;

    /// Append one entry to the stored sequence.
    fn append(&mut self, entry: HighScoreEntry) -> Result<(), ScoreStoreError>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    table: HighScoreTable,
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<HighScoreTable, ScoreStoreError> {
        Ok(self.table.clone())
    }

    fn append(&mut self, entry: HighScoreEntry) -> Result<(), ScoreStoreError> {
        self.table.entries.push(entry);
        Ok(())
    }
}
