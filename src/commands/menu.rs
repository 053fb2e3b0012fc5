//! Numbered menus
//!
//! Each menu is an enum whose variants are listed in display order; user input
//! is validated into a variant before anything is dispatched.

use crate::console::Console;

pub trait MenuChoice: Copy + Sized + 'static {
    /// Variants in the order they are numbered on screen
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    /// Map a 1-based menu number to a choice
    fn from_number(number: usize) -> Option<Self> {
        Self::ALL.get(number.checked_sub(1)?).copied()
    }

    fn from_input(input: &str) -> Option<Self> {
        input.trim().parse().ok().and_then(Self::from_number)
    }

    fn count() -> usize {
        Self::ALL.len()
    }
}

/// Print `heading` followed by the numbered options of `M`
pub fn print_menu<M: MenuChoice>(console: &mut dyn Console, heading: &str) {
    console.write_line(&format!("\n{}\n", heading));
    for (i, choice) in M::ALL.iter().enumerate() {
        console.write_line(&format!("{}. {}", i + 1, choice.label()));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    ManageCards,
    Quiz,
    Progress,
    Exit,
}

impl MenuChoice for MainMenuChoice {
    const ALL: &'static [Self] = &[Self::ManageCards, Self::Quiz, Self::Progress, Self::Exit];

    fn label(&self) -> &'static str {
        match self {
            Self::ManageCards => "Quiz Card Management",
            Self::Quiz => "Quiz Mode",
            Self::Progress => "Progress Tracking",
            Self::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManageChoice {
    Add,
    View,
    Edit,
    Delete,
    Return,
}

impl MenuChoice for ManageChoice {
    const ALL: &'static [Self] = &[Self::Add, Self::View, Self::Edit, Self::Delete, Self::Return];

    fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add a New Quiz Card",
            Self::View => "View Quiz Cards",
            Self::Edit => "Edit a Quiz Card",
            Self::Delete => "Delete a Quiz Card",
            Self::Return => "Return to Main Menu",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostQuizChoice {
    Retry,
    NewQuiz,
    Return,
}

impl MenuChoice for PostQuizChoice {
    const ALL: &'static [Self] = &[Self::Retry, Self::NewQuiz, Self::Return];

    fn label(&self) -> &'static str {
        match self {
            Self::Retry => "Try the same quiz again",
            Self::NewQuiz => "Start a new quiz",
            Self::Return => "Return to Main Menu",
        }
    }
}

pub fn print_welcome(console: &mut dyn Console) {
    let rule = "*".repeat(41);
    console.write_line(&rule);
    console.write_line("        Welcome to Quiz Cards!");
    console.write_line(&rule);
    console.write_line(
        "\nBoost your knowledge with Quiz Cards - your personal flashcard quiz tool!",
    );
    console.write_line("\nWhat you can do with Quiz Cards:\n");
    console.write_line("1. Add your own Quiz Cards for a custom learning experience.");
    console.write_line("2. View and manage all Quiz Cards to reinforce what you've learned.");
    console.write_line("3. Sort Quiz Cards into categories to keep everything organized.");
    console.write_line("4. Delete Quiz Cards you no longer need to stay focused.");
    console.write_line("5. Test yourself with the Quiz Mode and track your progress over time.");
    console.write_line("\nLet's get started and make your learning journey interactive and fun!");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::ScriptedConsole;

    #[test]
    fn test_main_menu_numbers() {
        assert_eq!(MainMenuChoice::from_input("1"), Some(MainMenuChoice::ManageCards));
        assert_eq!(MainMenuChoice::from_input(" 4 "), Some(MainMenuChoice::Exit));
        assert_eq!(MainMenuChoice::from_input("0"), None);
        assert_eq!(MainMenuChoice::from_input("5"), None);
        assert_eq!(MainMenuChoice::from_input("quiz"), None);
        assert_eq!(MainMenuChoice::from_input("-1"), None);
    }

    #[test]
    fn test_manage_menu_numbers() {
        assert_eq!(ManageChoice::count(), 5);
        assert_eq!(ManageChoice::from_number(3), Some(ManageChoice::Edit));
        assert_eq!(ManageChoice::from_number(5), Some(ManageChoice::Return));
        assert_eq!(ManageChoice::from_number(6), None);
    }

    #[test]
    fn test_print_menu() {
        let mut console = ScriptedConsole::new(&[]);
        print_menu::<PostQuizChoice>(&mut console, "Next?");

        assert_eq!(console.output[1], "1. Try the same quiz again");
        assert_eq!(console.output[3], "3. Return to Main Menu");
    }
}
