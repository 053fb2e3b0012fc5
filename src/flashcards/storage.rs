//! In-memory card list backed by a single JSON file
//!
//! The whole list is read on `load` and written back on every `save`.
//! Cards are addressed by their 1-based position in the list.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::models::{CardUpdate, Flashcard};
use crate::storage::{self, ListLoad, StorageError};

#[derive(Error, Debug)]
pub enum FlashcardStorageError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Both term and definition are required.")]
    MissingField,

    #[error("Card number {number} is out of range (1-{len})")]
    IndexOutOfRange { number: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, FlashcardStorageError>;

/// What happened when the card file was read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded(usize),
    Missing,
    Corrupt(String),
}

/// Owner of the flashcard list
pub struct CardStore {
    path: PathBuf,
    cards: Vec<Flashcard>,
}

impl CardStore {
    /// Create an empty store that persists to `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            cards: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory list with the file contents.
    /// A missing or unreadable file leaves the store empty.
    pub fn load(&mut self) -> LoadStatus {
        match storage::read_list(&self.path) {
            ListLoad::Loaded(cards) => {
                log::info!("Loaded {} cards from {:?}", cards.len(), self.path);
                self.cards = cards;
                LoadStatus::Loaded(self.cards.len())
            }
            ListLoad::Missing => {
                self.cards.clear();
                LoadStatus::Missing
            }
            ListLoad::Invalid(reason) => {
                self.cards.clear();
                LoadStatus::Corrupt(reason)
            }
        }
    }

    /// Overwrite the card file with the full list
    pub fn save(&self) -> Result<()> {
        storage::write_list(&self.path, &self.cards)?;
        log::info!("Saved {} cards to {:?}", self.cards.len(), self.path);
        Ok(())
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get the card at a 1-based position
    pub fn get(&self, number: usize) -> Result<&Flashcard> {
        let index = self.index_of(number)?;
        Ok(&self.cards[index])
    }

    /// Append a card. Incomplete cards are rejected and the list is left untouched.
    pub fn add(&mut self, card: Flashcard) -> Result<&Flashcard> {
        if !card.is_complete() {
            return Err(FlashcardStorageError::MissingField);
        }
        self.cards.push(card);
        Ok(&self.cards[self.cards.len() - 1])
    }

    /// Apply field changes to the card at a 1-based position
    pub fn update(&mut self, number: usize, update: &CardUpdate) -> Result<&Flashcard> {
        let index = self.index_of(number)?;
        let updated = update.apply(&self.cards[index]);
        self.cards[index] = updated;
        Ok(&self.cards[index])
    }

    /// Remove and return the card at a 1-based position
    pub fn delete(&mut self, number: usize) -> Result<Flashcard> {
        let index = self.index_of(number)?;
        Ok(self.cards.remove(index))
    }

    /// Cards in insertion order, optionally restricted to one effective category
    pub fn filter_by_category(&self, category: Option<&str>) -> Vec<&Flashcard> {
        self.cards
            .iter()
            .filter(|card| category.map_or(true, |c| card.effective_category() == c))
            .collect()
    }

    /// Distinct non-empty categories as stored on the cards
    pub fn list_categories(&self) -> BTreeSet<String> {
        self.cards
            .iter()
            .filter(|card| !card.category.is_empty())
            .map(|card| card.category.clone())
            .collect()
    }

    /// Sorted distinct effective categories, with empty ones as "Uncategorized"
    pub fn effective_categories(&self) -> Vec<String> {
        self.cards
            .iter()
            .map(|card| card.effective_category().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn index_of(&self, number: usize) -> Result<usize> {
        if number == 0 || number > self.cards.len() {
            return Err(FlashcardStorageError::IndexOutOfRange {
                number,
                len: self.cards.len(),
            });
        }
        Ok(number - 1)
    }
}
