use rand::Rng;

use crate::commands::{self, print_menu, MainMenuChoice, ManageChoice, MenuChoice};
use crate::config::Config;
use crate::console::Console;
use crate::flashcards::CardStore;
use crate::progress::ProgressStorage;

/// Shared application state for one study session
pub struct App<C: Console, R: Rng> {
    config: Config,
    pub cards: CardStore,
    pub progress: ProgressStorage,
    console: C,
    rng: R,
}

impl<C: Console, R: Rng> App<C, R> {
    pub fn new(config: Config, console: C, rng: R) -> Self {
        let cards = CardStore::new(config.cards_path.clone());
        let progress = ProgressStorage::new(config.progress_path.clone());
        Self {
            config,
            cards,
            progress,
            console,
            rng,
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Greet, load data, and serve the main menu until the user exits
    pub fn run(&mut self) {
        log::info!(
            "Starting session with cards={:?} progress={:?}",
            self.config.cards_path,
            self.config.progress_path
        );

        commands::print_welcome(&mut self.console);
        commands::load_cards(&mut self.cards, &mut self.console);
        commands::init_progress(&self.progress, &mut self.console);

        self.main_menu();

        self.console.write_line("\nThank you for using Quiz Cards! Goodbye!");
    }

    fn main_menu(&mut self) {
        loop {
            print_menu::<MainMenuChoice>(&mut self.console, "Quiz Cards Main Menu");

            // Closed input takes the regular exit path so cards are still saved
            let choice = match self.console.ask("\nPlease select an option (1-4):") {
                Some(input) => MainMenuChoice::from_input(&input),
                None => Some(MainMenuChoice::Exit),
            };

            match choice {
                Some(MainMenuChoice::ManageCards) => self.management_menu(),
                Some(MainMenuChoice::Quiz) => commands::start_quiz(
                    &self.cards,
                    &self.progress,
                    &mut self.console,
                    &mut self.rng,
                ),
                Some(MainMenuChoice::Progress) => {
                    commands::view_progress(&self.progress, &mut self.console)
                }
                Some(MainMenuChoice::Exit) => {
                    commands::save_cards(&self.cards, &mut self.console);
                    return;
                }
                None => self.console.print_error("Invalid option. Please try again."),
            }
        }
    }

    fn management_menu(&mut self) {
        loop {
            print_menu::<ManageChoice>(&mut self.console, "Quiz Card Management");

            let Some(input) = self.console.ask("\nPlease select an option (1-5):") else {
                return;
            };

            match ManageChoice::from_input(&input) {
                Some(ManageChoice::Add) => commands::add_card(&mut self.cards, &mut self.console),
                Some(ManageChoice::View) => commands::view_cards(&self.cards, &mut self.console),
                Some(ManageChoice::Edit) => commands::edit_card(&mut self.cards, &mut self.console),
                Some(ManageChoice::Delete) => {
                    commands::delete_card(&mut self.cards, &mut self.console)
                }
                Some(ManageChoice::Return) => {
                    self.console.write_line("\nReturning to Main Menu...");
                    return;
                }
                None => self.console.print_error("Invalid option. Please try again."),
            }
        }
    }
}
