use std::path::PathBuf;

pub const DEFAULT_CARDS_FILE: &str = "flashcards.json";
pub const DEFAULT_PROGRESS_FILE: &str = "progress.json";

/// Runtime settings for a study session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON array of flashcards
    pub cards_path: PathBuf,
    /// JSON array of quiz results
    pub progress_path: PathBuf,
    /// Emit ANSI colors on the console
    pub use_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cards_path: PathBuf::from(DEFAULT_CARDS_FILE),
            progress_path: PathBuf::from(DEFAULT_PROGRESS_FILE),
            use_color: true,
        }
    }
}
