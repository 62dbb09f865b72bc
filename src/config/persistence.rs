//! Run history persistence module
//!
//! Handles saving, loading, and rotation of completed benchmark runs.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::RunRecord;
use crate::{DiskMarkError, Result, APP_NAME, HISTORY_FILE, MAX_HISTORY};

/// Run history storage manager
#[derive(Debug)]
pub struct HistoryStore {
    history_path: PathBuf,
}

/// History file structure for JSON persistence
#[derive(Debug, Serialize, Deserialize)]
struct HistoryFile {
    version: u32,
    runs: Vec<RunRecord>,
}

impl HistoryStore {
    /// Create a new history store at the standard location
    pub fn new() -> Result<Self> {
        let history_path = Self::history_file_path()?;
        Ok(Self { history_path })
    }

    /// Create a history store backed by an explicit file path
    pub fn with_path(history_path: PathBuf) -> Self {
        Self { history_path }
    }

    /// Get the standard history file path
    /// Uses $DATA_HOME/diskmark/history.json or the platform equivalent
    pub fn history_file_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().ok_or_else(|| {
            DiskMarkError::PersistenceError("Unable to determine data directory".to_string())
        })?;

        Ok(data_dir.join(APP_NAME).join(HISTORY_FILE))
    }

    /// Load all recorded runs from the history file
    pub fn load_runs(&self) -> Result<Vec<RunRecord>> {
        if !self.history_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.history_path).map_err(|e| {
            DiskMarkError::PersistenceError(format!(
                "Failed to read history file {}: {}",
                self.history_path.display(),
                e
            ))
        })?;

        let history: HistoryFile = serde_json::from_str(&content)?;

        Ok(history.runs)
    }

    /// Append a run to the history file
    /// Rotates old entries once the file exceeds `MAX_HISTORY` runs
    pub fn append_run(&self, run: RunRecord) -> Result<()> {
        let mut runs = self.load_runs()?;

        runs.push(run);

        if runs.len() > MAX_HISTORY {
            let skip_count = runs.len() - MAX_HISTORY;
            runs = runs.into_iter().skip(skip_count).collect();
        }

        self.save_runs(runs)
    }

    /// Save all runs to the history file
    fn save_runs(&self, runs: Vec<RunRecord>) -> Result<()> {
        if let Some(parent) = self.history_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                DiskMarkError::PersistenceError(format!(
                    "Failed to create history directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let history = HistoryFile { version: 1, runs };

        let content = serde_json::to_string_pretty(&history)?;

        fs::write(&self.history_path, content).map_err(|e| {
            DiskMarkError::PersistenceError(format!(
                "Failed to write history file {}: {}",
                self.history_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the most recent N runs
    pub fn recent_runs(&self, count: usize) -> Result<Vec<RunRecord>> {
        let runs = self.load_runs()?;

        if runs.len() <= count {
            Ok(runs)
        } else {
            let skip_count = runs.len() - count;
            Ok(runs.into_iter().skip(skip_count).collect())
        }
    }

    /// Clear all stored runs
    pub fn clear(&self) -> Result<()> {
        if self.history_path.exists() {
            fs::remove_file(&self.history_path).map_err(|e| {
                DiskMarkError::PersistenceError(format!(
                    "Failed to remove history file {}: {}",
                    self.history_path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Get the history file path for external access
    pub fn path(&self) -> &PathBuf {
        &self.history_path
    }
}
