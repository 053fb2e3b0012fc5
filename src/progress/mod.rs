//! Quiz progress log
//!
//! One `ProgressEntry` is appended per finished quiz session. Entries are
//! never edited; the log can only be cleared as a whole.

pub mod models;
pub mod storage;

pub use models::*;
pub use storage::{InitStatus, ProgressStorage};
