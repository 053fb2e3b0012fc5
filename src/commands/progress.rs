//! Progress history screen

use crate::console::Console;
use crate::progress::{InitStatus, ProgressStorage, ProgressSummary};
use crate::storage::ListLoad;

/// Make sure the progress file exists and holds a list
pub fn init_progress(progress: &ProgressStorage, console: &mut dyn Console) {
    match progress.init() {
        Ok(InitStatus::Reset) => console
            .write_line("Progress file initialized as an empty list due to invalid data."),
        Ok(InitStatus::Ready | InitStatus::Created) => {}
        Err(e) => {
            log::warn!("Failed to initialize {:?}: {}", progress.path(), e);
            console.print_error("Unable to initialize the progress file.");
        }
    }
}

pub fn view_progress(progress: &ProgressStorage, console: &mut dyn Console) {
    console.print_section_title("View Progress");

    let entries = match progress.load() {
        ListLoad::Loaded(entries) => entries,
        ListLoad::Missing => {
            console.write_line("\nNo quiz progress available.");
            return;
        }
        ListLoad::Invalid(_) => {
            console.print_error("Progress data file is corrupted.");
            return;
        }
    };

    if entries.is_empty() {
        console.write_line("No quiz progress available.");
        console.write_line("\nReturning to Main Menu...");
        return;
    }

    console.write_line("Quiz Progress History:");
    for entry in &entries {
        console.write_line(&format!("Date: {}", entry.date));
        console.write_line(&format!("Category: {}", entry.category));
        console.write_line(&format!("Score: {} / {}", entry.score, entry.total_questions));
        console.write_line(&format!("Success Rate: {:.2}%", entry.success_rate));
        console.write_line(&"-".repeat(30));
    }

    print_summary(console, &ProgressSummary::from_entries(&entries));
    clear_progress(progress, console);
}

fn print_summary(console: &mut dyn Console, summary: &ProgressSummary) {
    console.write_line("\nProgress Summary:");
    console.write_line(&format!("Total Quizzes Taken: {}", summary.total_quizzes));
    console.write_line(&format!(
        "Average Success Rate: {:.2}%",
        summary.average_success_rate
    ));
    console.write_line(&format!("Highest Score Achieved: {}", summary.highest_score));
    match summary.lowest_nonzero_score {
        Some(score) => console.write_line(&format!("Lowest Score Achieved: {}", score)),
        None => console
            .write_line("Lowest Score Achieved: No completed quizzes with a non-zero score."),
    }
}

/// Empty the log after two separate confirmations. Returns whether it was cleared.
pub fn clear_progress(progress: &ProgressStorage, console: &mut dyn Console) -> bool {
    match console.confirm("\nWould you like to clear all quiz progress? (yes/no):") {
        Some(true) => {}
        Some(false) | None => {
            console.write_line("\nReturning to Main Menu...");
            return false;
        }
    }

    match console.confirm(
        "\nAre you sure you want to delete all progress? This action cannot be undone. (yes/no):",
    ) {
        Some(true) => {}
        Some(false) | None => {
            console.write_line("\nClear progress cancelled.");
            return false;
        }
    }

    match progress.clear() {
        Ok(()) => {
            console.print_success("All quiz progress has been cleared.");
            true
        }
        Err(e) => {
            log::warn!("Failed to clear {:?}: {}", progress.path(), e);
            console.print_error("Unable to clear quiz progress.");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::ScriptedConsole;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_storage() -> (ProgressStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = ProgressStorage::new(temp_dir.path().join("progress.json"));
        (storage, temp_dir)
    }

    fn seeded_storage() -> (ProgressStorage, TempDir) {
        let (storage, temp) = create_test_storage();
        storage.record("Science", 0, 4).unwrap();
        storage.record("Science", 0, 4).unwrap();
        storage.record("All Categories", 5, 8).unwrap();
        (storage, temp)
    }

    #[test]
    fn test_view_progress_summary() {
        let (storage, _temp) = seeded_storage();
        let mut console = ScriptedConsole::new(&["no"]);

        view_progress(&storage, &mut console);

        let transcript = console.transcript();
        assert!(transcript.contains("Total Quizzes Taken: 3"));
        assert!(transcript.contains("Average Success Rate: 31.25%"));
        assert!(transcript.contains("Highest Score Achieved: 5"));
        assert!(transcript.contains("Lowest Score Achieved: 5"));
        assert!(transcript.contains("Score: 5 / 8"));
        assert_eq!(storage.load().into_items().len(), 3);
    }

    #[test]
    fn test_view_progress_all_zero() {
        let (storage, _temp) = create_test_storage();
        storage.record("Science", 0, 2).unwrap();
        let mut console = ScriptedConsole::new(&["no"]);

        view_progress(&storage, &mut console);

        assert!(console
            .transcript()
            .contains("Lowest Score Achieved: No completed quizzes with a non-zero score."));
    }

    #[test]
    fn test_view_progress_empty() {
        let (storage, _temp) = create_test_storage();
        storage.init().unwrap();
        let mut console = ScriptedConsole::new(&[]);

        view_progress(&storage, &mut console);

        assert!(console.transcript().contains("No quiz progress available."));
    }

    #[test]
    fn test_view_progress_corrupt() {
        let (storage, _temp) = create_test_storage();
        fs::write(storage.path(), "{{").unwrap();
        let mut console = ScriptedConsole::new(&[]);

        view_progress(&storage, &mut console);

        assert!(console.transcript().contains("Progress data file is corrupted."));
    }

    #[test]
    fn test_clear_requires_both_confirmations() {
        let (storage, _temp) = seeded_storage();

        let mut console = ScriptedConsole::new(&["no"]);
        assert!(!clear_progress(&storage, &mut console));
        assert_eq!(storage.load().into_items().len(), 3);

        let mut console = ScriptedConsole::new(&["yes", "no"]);
        assert!(!clear_progress(&storage, &mut console));
        assert_eq!(storage.load().into_items().len(), 3);
        assert!(console.transcript().contains("Clear progress cancelled."));

        let mut console = ScriptedConsole::new(&["yes", "yes"]);
        assert!(clear_progress(&storage, &mut console));
        assert!(storage.load().into_items().is_empty());
    }

    #[test]
    fn test_clear_reprompts_invalid_answer() {
        let (storage, _temp) = seeded_storage();
        let mut console = ScriptedConsole::new(&["sure", "yes", "YES"]);

        assert!(clear_progress(&storage, &mut console));
        assert!(console.transcript().contains("Please enter 'yes' or 'no'."));
    }

    #[test]
    fn test_init_progress_resets_invalid_file() {
        let (storage, _temp) = create_test_storage();
        fs::write(storage.path(), "42").unwrap();
        let mut console = ScriptedConsole::new(&[]);

        init_progress(&storage, &mut console);

        assert!(console.transcript().contains("initialized as an empty list"));
        assert!(matches!(storage.load(), ListLoad::Loaded(ref e) if e.is_empty()));
    }
}
