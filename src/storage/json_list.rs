use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Outcome of reading a file that should hold a single JSON array.
///
/// Reading never fails: anything that is not a readable array of `T`
/// surfaces as `Missing` or `Invalid` and callers fall back to an empty list.
#[derive(Debug)]
pub enum ListLoad<T> {
    Loaded(Vec<T>),
    Missing,
    Invalid(String),
}

impl<T> ListLoad<T> {
    /// Items that were loaded, or an empty list for any failure
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListLoad::Loaded(items) => items,
            ListLoad::Missing | ListLoad::Invalid(_) => Vec::new(),
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, ListLoad::Invalid(_))
    }
}

/// Read a JSON array from `path`
pub fn read_list<T: DeserializeOwned>(path: &Path) -> ListLoad<T> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No list file at {:?}", path);
            return ListLoad::Missing;
        }
        Err(e) => {
            log::warn!("Failed to read {:?}: {}", path, e);
            return ListLoad::Invalid(e.to_string());
        }
    };

    match serde_json::from_str::<Vec<T>>(&content) {
        Ok(items) => {
            log::debug!("Loaded {} items from {:?}", items.len(), path);
            ListLoad::Loaded(items)
        }
        Err(e) => {
            log::warn!("Discarding unreadable list in {:?}: {}", path, e);
            ListLoad::Invalid(e.to_string())
        }
    }
}

/// Overwrite `path` with the whole list, pretty-printed
pub fn write_list<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let content = serde_json::to_string_pretty(items)?;
    fs::write(path, content)?;
    log::debug!("Wrote {} items to {:?}", items.len(), path);
    Ok(())
}
