//! Flashcard records and the card store
//!
//! This module provides:
//! - The `Flashcard` record and category normalization
//! - `CardStore`, the owner of the in-memory card list and its JSON file

pub mod models;
pub mod storage;

pub use models::*;
pub use storage::{CardStore, FlashcardStorageError, LoadStatus};
