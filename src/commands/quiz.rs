//! Interactive quiz mode
//!
//! Flow: pick a category, pick a question count, answer questions, then
//! retry the same quiz, start a new one, or go back to the main menu.

use rand::Rng;

use super::menu::{print_menu, MenuChoice, PostQuizChoice};
use crate::console::Console;
use crate::flashcards::CardStore;
use crate::progress::ProgressStorage;
use crate::quiz::{run_session, QuizScope, QuizSettings, QuizTally};

pub fn start_quiz<R: Rng + ?Sized>(
    store: &CardStore,
    progress: &ProgressStorage,
    console: &mut dyn Console,
    rng: &mut R,
) {
    console.print_section_title("Quiz Mode");
    if store.is_empty() {
        console.write_line("No Quiz Cards available for quiz. Please add Quiz Cards first.");
        console.write_line("\nReturning to Main Menu...");
        return;
    }

    loop {
        let Some(settings) = select_quiz(store, console) else {
            return;
        };

        loop {
            run_quiz(store, progress, &settings, console, rng);

            print_menu::<PostQuizChoice>(console, "Quiz Complete! What would you like to do next?");
            let choice = console
                .choose_number("\nChoose an option (1-3):", 1, PostQuizChoice::count())
                .and_then(PostQuizChoice::from_number);

            match choice {
                Some(PostQuizChoice::Retry) => continue,
                Some(PostQuizChoice::NewQuiz) => break,
                Some(PostQuizChoice::Return) | None => {
                    console.write_line("\nReturning to Main Menu...");
                    return;
                }
            }
        }
    }
}

/// Ask for a category and a question count
pub fn select_quiz(store: &CardStore, console: &mut dyn Console) -> Option<QuizSettings> {
    let categories = store.effective_categories();
    let all = categories.len() + 1;

    console.write_line("\nAvailable Categories:");
    for (i, category) in categories.iter().enumerate() {
        console.write_line(&format!("{}. {}", i + 1, category));
    }
    console.write_line(&format!("{}. All Categories", all));

    let selection = console.choose_number(
        "\nSelect a category by number (or choose 'All Categories'):",
        1,
        all,
    )?;
    let scope = if selection == all {
        QuizScope::All
    } else {
        QuizScope::Category(categories[selection - 1].clone())
    };

    let pool_size = scope.pool(store.cards()).len();
    if pool_size == 0 {
        console.write_line(&format!(
            "\nNo Quiz Cards found for category '{}'. Please add flashcards to this category.",
            scope.label()
        ));
        return None;
    }

    match &scope {
        QuizScope::Category(name) => {
            console.write_line(&format!("\nStarting quiz on category '{}'...", name))
        }
        QuizScope::All => console.write_line("\nStarting quiz on all categories..."),
    }

    let question_count = console.choose_number(
        &format!("\nHow many questions would you like? (1-{}):", pool_size),
        1,
        pool_size,
    )?;

    Some(QuizSettings {
        scope,
        question_count,
    })
}

/// Run one session and record it when at least one question was answered
pub fn run_quiz<R: Rng + ?Sized>(
    store: &CardStore,
    progress: &ProgressStorage,
    settings: &QuizSettings,
    console: &mut dyn Console,
    rng: &mut R,
) -> QuizTally {
    let pool = settings.scope.pool(store.cards());
    let tally = run_session(&pool, settings.question_count, console, rng);

    if !tally.should_record() {
        console.write_line("\nNo questions were attempted; progress will not be saved.");
        return tally;
    }

    let heading = if tally.exited_early {
        "Quiz ended early!"
    } else {
        "Quiz complete!"
    };
    console.write_line(&format!(
        "\n{} You scored {} out of {}.",
        heading, tally.correct, tally.answered
    ));

    match progress.record(settings.scope.label(), tally.correct, tally.answered) {
        Ok(_) => console.write_line("\nProgress saved successfully!"),
        Err(e) => {
            log::warn!("Failed to record progress in {:?}: {}", progress.path(), e);
            console.print_error("Unable to save progress.");
        }
    }

    tally
}
