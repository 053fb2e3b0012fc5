//! Quiz Cards: a personal flashcard study tool
//!
//! Cards live in one JSON file and quiz results in another. The binary drives
//! everything through numbered text menus; the modules here hold the state
//! and the screens so they can be exercised without a terminal.

pub mod app;
pub mod commands;
pub mod config;
pub mod console;
pub mod flashcards;
pub mod progress;
pub mod quiz;
pub mod storage;

pub use app::App;
pub use config::Config;
