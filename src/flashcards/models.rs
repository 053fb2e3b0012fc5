//! Data models for the flashcard system

use serde::{Deserialize, Serialize};

/// Category shown for cards stored without one
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A flashcard with a term (question) and its definition (answer)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub term: String,
    pub definition: String,
    #[serde(default)]
    pub category: String,
}

impl Flashcard {
    /// Build a card from user input. An empty category becomes "Uncategorized".
    pub fn new(term: &str, definition: &str, category: &str) -> Self {
        let category = normalize_category(category);
        Self {
            term: term.trim().to_string(),
            definition: definition.trim().to_string(),
            category: if category.is_empty() {
                UNCATEGORIZED.to_string()
            } else {
                category
            },
        }
    }

    /// Both term and definition are present
    pub fn is_complete(&self) -> bool {
        !self.term.is_empty() && !self.definition.is_empty()
    }

    /// The category used for listing, filtering and quizzing
    pub fn effective_category(&self) -> &str {
        if self.category.is_empty() {
            UNCATEGORIZED
        } else {
            &self.category
        }
    }
}

/// Field changes for an existing card. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardUpdate {
    pub term: Option<String>,
    pub definition: Option<String>,
    pub category: Option<String>,
}

impl CardUpdate {
    /// Build an update from raw prompt answers, treating blank answers as "keep"
    pub fn from_input(term: &str, definition: &str, category: &str) -> Self {
        fn keep_if_blank(value: String) -> Option<String> {
            if value.is_empty() {
                None
            } else {
                Some(value)
            }
        }

        Self {
            term: keep_if_blank(term.trim().to_string()),
            definition: keep_if_blank(definition.trim().to_string()),
            category: keep_if_blank(normalize_category(category)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_none() && self.definition.is_none() && self.category.is_none()
    }

    /// The card as it would look after this update
    pub fn apply(&self, card: &Flashcard) -> Flashcard {
        Flashcard {
            term: self.term.clone().unwrap_or_else(|| card.term.clone()),
            definition: self
                .definition
                .clone()
                .unwrap_or_else(|| card.definition.clone()),
            category: self.category.clone().unwrap_or_else(|| card.category.clone()),
        }
    }
}

/// Trim and title-case a category: the first letter of every alphabetic run
/// is upper-cased and the rest lower-cased ("data science" -> "Data Science").
pub fn normalize_category(input: &str) -> String {
    let mut normalized = String::with_capacity(input.len());
    let mut in_word = false;

    for ch in input.trim().chars() {
        if ch.is_alphabetic() {
            if in_word {
                normalized.extend(ch.to_lowercase());
            } else {
                normalized.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            normalized.push(ch);
            in_word = false;
        }
    }

    normalized
}
