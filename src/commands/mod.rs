//! Interactive screens behind the numbered menus

pub mod cards;
pub mod menu;
pub mod progress;
pub mod quiz;

pub use cards::{add_card, delete_card, edit_card, load_cards, save_cards, view_cards};
pub use menu::{print_menu, print_welcome, MainMenuChoice, ManageChoice, MenuChoice, PostQuizChoice};
pub use progress::{clear_progress, init_progress, view_progress};
pub use quiz::{run_quiz, select_quiz, start_quiz};
