use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::error::ScoreStoreError;
use super::{HighScoreEntry, HighScoreTable, ScoreStore};

/// JSON-file-backed score store.
///
/// The whole table lives in one document. Writes go through a temp file
/// and an atomic rename, so a crash mid-write never leaves a truncated
/// store behind.
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<HighScoreTable, ScoreStoreError> {
        if !self.path.exists() {
            return Ok(HighScoreTable::default());
        }

        let data = fs::read_to_string(&self.path)?;
        if data.trim().is_empty() {
            return Ok(HighScoreTable::default());
        }

        let table = serde_json::from_str(&data)?;
        log::debug!("loaded high scores from {:?}", self.path);
        Ok(table)
    }

    fn write_table(&self, table: &HighScoreTable) -> Result<(), ScoreStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = serde_json::to_string_pretty(table)?;

        // Atomic save: write to temp file, then rename
        let temp_path = self.path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(data.as_bytes())?;
            file.flush()?;

            // sync_all ensures data is written to disk (portable fsync)
            file.sync_all()?;
        }
        fs::rename(&temp_path, &self.path)?;

        log::debug!("wrote {} high score entries to {:?}", table.entries.len(), self.path);
        Ok(())
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Result<HighScoreTable, ScoreStoreError> {
        self.read_table()
    }

    fn append(&mut self, entry: HighScoreEntry) -> Result<(), ScoreStoreError> {
        let mut table = self.read_table()?;
        table.entries.push(entry);
        self.write_table(&table)
    }
}
