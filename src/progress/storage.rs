//! Append-only quiz progress log stored as one JSON array

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use super::models::ProgressEntry;
use crate::storage::{self, ListLoad, Result};

/// State of the progress file after `init`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStatus {
    Ready,
    Created,
    Reset,
}

/// Storage manager for the progress file
pub struct ProgressStorage {
    path: PathBuf,
}

impl ProgressStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Make sure the progress file holds a JSON array, creating or
    /// resetting it to `[]` when it does not
    pub fn init(&self) -> Result<InitStatus> {
        match storage::read_list::<ProgressEntry>(&self.path) {
            ListLoad::Loaded(_) => Ok(InitStatus::Ready),
            ListLoad::Missing => {
                storage::write_list::<ProgressEntry>(&self.path, &[])?;
                log::info!("Created progress file {:?}", self.path);
                Ok(InitStatus::Created)
            }
            ListLoad::Invalid(reason) => {
                storage::write_list::<ProgressEntry>(&self.path, &[])?;
                log::warn!("Reset invalid progress file {:?}: {}", self.path, reason);
                Ok(InitStatus::Reset)
            }
        }
    }

    /// Read all entries
    pub fn load(&self) -> ListLoad<ProgressEntry> {
        storage::read_list(&self.path)
    }

    /// Append one session result stamped with the current local time
    pub fn record(&self, category: &str, correct: u32, total: u32) -> Result<ProgressEntry> {
        self.record_at(category, correct, total, Local::now().naive_local())
    }

    /// Append one session result with an explicit timestamp.
    /// Unreadable existing data is replaced rather than appended to.
    pub fn record_at(
        &self,
        category: &str,
        correct: u32,
        total: u32,
        at: NaiveDateTime,
    ) -> Result<ProgressEntry> {
        let entry = ProgressEntry::new(category, correct, total, at);

        let existing = self.load();
        if existing.is_invalid() {
            log::warn!("Replacing unreadable progress data in {:?}", self.path);
        }
        let mut entries = existing.into_items();
        entries.push(entry.clone());
        storage::write_list(&self.path, &entries)?;

        log::info!(
            "Recorded quiz result for '{}': {}/{} ({}%)",
            entry.category,
            entry.score,
            entry.total_questions,
            entry.success_rate
        );
        Ok(entry)
    }

    /// Truncate the log to an empty list
    pub fn clear(&self) -> Result<()> {
        storage::write_list::<ProgressEntry>(&self.path, &[])?;
        log::info!("Cleared progress file {:?}", self.path);
        Ok(())
    }
}
