//! JSONL (JSON Lines) history of priority rotations
//!
//! Provides append-only logging of applied rotations to `.todo-priority/log.jsonl`

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use crate::todo::Rotation;

/// One applied priority rotation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RotationRecord {
    /// ISO 8601 timestamp of when the rotation was applied
    pub timestamp: DateTime<Utc>,
    /// Priority before the rotation
    pub from: String,
    /// Priority after the rotation
    pub to: String,
    /// The todo that was rotated, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todo_id: Option<u64>,
}

impl RotationRecord {
    /// Record a rotation happening now
    #[must_use]
    pub fn now(from: &str, to: &str, todo_id: Option<u64>) -> Self {
        Self {
            timestamp: Utc::now(),
            from: from.to_string(),
            to: to.to_string(),
            todo_id,
        }
    }

    /// Record a rotation applied to a todo
    #[must_use]
    pub fn for_todo(todo_id: u64, rotation: &Rotation) -> Self {
        Self::now(&rotation.from, &rotation.to, Some(todo_id))
    }
}

/// JSONL logger for rotation history
///
/// Each line is a JSON object representing a single rotation.
pub struct RotationLog {
    log_path: PathBuf,
}

impl RotationLog {
    /// Create a new rotation log
    ///
    /// # Arguments
    /// * `log_dir` - Directory where log.jsonl will be stored (typically `.todo-priority`)
    ///
    /// # Errors
    /// Returns an error if the log directory cannot be created
    pub fn new<P: AsRef<Path>>(log_dir: P) -> Result<Self> {
        let log_dir = log_dir.as_ref();

        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        Ok(Self {
            log_path: log_dir.join("log.jsonl"),
        })
    }

    /// Open an existing log for reading without touching the filesystem
    ///
    /// A directory that does not exist reads as an empty history.
    #[must_use]
    pub fn open<P: AsRef<Path>>(log_dir: P) -> Self {
        Self {
            log_path: log_dir.as_ref().join("log.jsonl"),
        }
    }

    /// Append a rotation to the log
    ///
    /// # Errors
    /// Returns an error if:
    /// - The log file cannot be opened or created
    /// - The record cannot be serialized to JSON
    /// - Writing to the file fails
    pub fn append(&self, record: &RotationRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open log file: {}", self.log_path.display()))?;

        let json =
            serde_json::to_string(record).context("Failed to serialize rotation to JSON")?;

        writeln!(file, "{json}").context("Failed to write to log file")?;

        Ok(())
    }

    /// Read all rotations from the log, oldest first
    ///
    /// # Errors
    /// Returns an error if:
    /// - The log file cannot be read
    /// - Any line cannot be parsed as valid JSON
    pub fn read_all(&self) -> Result<Vec<RotationRecord>> {
        // No rotations logged yet
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.log_path)
            .with_context(|| format!("Failed to read log file: {}", self.log_path.display()))?;

        let mut records = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let record: RotationRecord = serde_json::from_str(line)
                .with_context(|| format!("Failed to parse line {} as JSON", line_num + 1))?;

            records.push(record);
        }

        Ok(records)
    }

    /// Get the path to the log file
    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}
