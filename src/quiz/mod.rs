//! Quiz engine
//!
//! A quiz draws cards from a pool with replacement and asks each one in a
//! random direction. Answers are compared case-insensitively.

use rand::Rng;

use crate::console::Console;
use crate::flashcards::Flashcard;

/// Label recorded for quizzes over every card
pub const ALL_CATEGORIES: &str = "All Categories";

/// Answer that ends a quiz early
pub const EXIT_KEYWORD: &str = "exit";

/// Which cards a quiz draws from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizScope {
    Category(String),
    All,
}

impl QuizScope {
    /// Name recorded in the progress log
    pub fn label(&self) -> &str {
        match self {
            QuizScope::Category(name) => name,
            QuizScope::All => ALL_CATEGORIES,
        }
    }

    /// Cards eligible for this scope, in insertion order
    pub fn pool<'a>(&self, cards: &'a [Flashcard]) -> Vec<&'a Flashcard> {
        match self {
            QuizScope::Category(name) => cards
                .iter()
                .filter(|card| card.effective_category() == name.as_str())
                .collect(),
            QuizScope::All => cards.iter().collect(),
        }
    }
}

/// Parameters of a quiz, reused when the user retries it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    pub scope: QuizScope,
    pub question_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Show the term, expect the definition
    TermToDefinition,
    /// Show the definition, expect the term
    DefinitionToTerm,
}

#[derive(Debug, Clone, Copy)]
pub struct Question<'a> {
    pub card: &'a Flashcard,
    pub direction: Direction,
}

impl<'a> Question<'a> {
    pub fn prompt(&self) -> String {
        match self.direction {
            Direction::TermToDefinition => format!(
                "\nWhat is the definition of '{}'? (or type '{}' to quit):",
                self.card.term, EXIT_KEYWORD
            ),
            Direction::DefinitionToTerm => format!(
                "\nWhat term matches the definition '{}'? (or type '{}' to quit):",
                self.card.definition, EXIT_KEYWORD
            ),
        }
    }

    pub fn expected(&self) -> &'a str {
        match self.direction {
            Direction::TermToDefinition => &self.card.definition,
            Direction::DefinitionToTerm => &self.card.term,
        }
    }

    pub fn judge(&self, answer: &str) -> Answer {
        let answer = answer.trim();
        if answer.eq_ignore_ascii_case(EXIT_KEYWORD) {
            Answer::Exit
        } else if answer.is_empty() {
            Answer::Empty
        } else if answer.to_lowercase() == self.expected().trim().to_lowercase() {
            Answer::Correct
        } else {
            Answer::Incorrect
        }
    }
}

/// Classification of one typed answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Correct,
    Incorrect,
    Empty,
    Exit,
}

/// Draw a card uniformly from `pool` and pick a direction with a fair coin
pub fn draw_question<'a, R: Rng + ?Sized>(
    pool: &[&'a Flashcard],
    rng: &mut R,
) -> Option<Question<'a>> {
    if pool.is_empty() {
        return None;
    }
    let card = pool[rng.gen_range(0..pool.len())];
    let direction = if rng.gen_bool(0.5) {
        Direction::TermToDefinition
    } else {
        Direction::DefinitionToTerm
    };
    Some(Question { card, direction })
}

/// Score of one quiz session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizTally {
    pub correct: u32,
    pub answered: u32,
    /// The user left before the requested number of questions
    pub exited_early: bool,
}

impl QuizTally {
    /// Only sessions with at least one answered question are recorded
    pub fn should_record(&self) -> bool {
        self.answered > 0
    }
}

/// Ask up to `question_count` questions drawn from `pool`.
///
/// An empty answer repeats the same question without counting it. The exit
/// keyword, or the end of input, stops the session early.
pub fn run_session<R: Rng + ?Sized>(
    pool: &[&Flashcard],
    question_count: usize,
    console: &mut dyn Console,
    rng: &mut R,
) -> QuizTally {
    let mut tally = QuizTally::default();

    while (tally.answered as usize) < question_count {
        let Some(question) = draw_question(pool, rng) else {
            break;
        };

        loop {
            let Some(answer) = console.read_line(&question.prompt()) else {
                tally.exited_early = true;
                return tally;
            };

            match question.judge(&answer) {
                Answer::Exit => {
                    tally.exited_early = true;
                    return tally;
                }
                Answer::Empty => {
                    console.write_line("\nNo answer provided. Please enter an answer.");
                }
                Answer::Correct => {
                    console.print_success("Correct!");
                    tally.correct += 1;
                    break;
                }
                Answer::Incorrect => {
                    console.write_line(&format!(
                        "\nIncorrect. The correct answer is: {}",
                        question.expected()
                    ));
                    break;
                }
            }
        }

        tally.answered += 1;
    }

    log::debug!(
        "Quiz session finished: {}/{} correct",
        tally.correct,
        tally.answered
    );
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::ScriptedConsole;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn card(term: &str, definition: &str, category: &str) -> Flashcard {
        Flashcard {
            term: term.to_string(),
            definition: definition.to_string(),
            category: category.to_string(),
        }
    }

    /// Same answer in both directions, so scripted answers don't depend on the draw
    fn symmetric_card() -> Flashcard {
        card("Echo", "echo", "Words")
    }

    #[test]
    fn test_scope_pool() {
        let cards = vec![
            card("a", "1", "Math"),
            card("b", "2", ""),
            card("c", "3", "Math"),
        ];

        let math = QuizScope::Category("Math".to_string());
        assert_eq!(math.pool(&cards).len(), 2);
        assert_eq!(math.label(), "Math");

        let uncategorized = QuizScope::Category("Uncategorized".to_string());
        assert_eq!(uncategorized.pool(&cards)[0].term, "b");

        assert_eq!(QuizScope::All.pool(&cards).len(), 3);
        assert_eq!(QuizScope::All.label(), ALL_CATEGORIES);
    }

    #[test]
    fn test_judge() {
        let card = card("Paris", "Capital of France", "Geography");
        let question = Question {
            card: &card,
            direction: Direction::TermToDefinition,
        };

        assert_eq!(question.judge("capital of FRANCE"), Answer::Correct);
        assert_eq!(question.judge("  Capital of France  "), Answer::Correct);
        assert_eq!(question.judge("Paris"), Answer::Incorrect);
        assert_eq!(question.judge("   "), Answer::Empty);
        assert_eq!(question.judge("EXIT"), Answer::Exit);

        let reversed = Question {
            card: &card,
            direction: Direction::DefinitionToTerm,
        };
        assert_eq!(reversed.expected(), "Paris");
        assert!(reversed.prompt().contains("Capital of France"));
    }

    #[test]
    fn test_draw_covers_pool_and_directions() {
        let cards = vec![card("a", "1", ""), card("b", "2", ""), card("c", "3", "")];
        let pool = QuizScope::All.pool(&cards);
        let mut rng = StdRng::seed_from_u64(7);

        let mut seen_terms = std::collections::HashSet::new();
        let mut seen_directions = std::collections::HashSet::new();
        for _ in 0..200 {
            let question = draw_question(&pool, &mut rng).unwrap();
            seen_terms.insert(question.card.term.clone());
            seen_directions.insert(question.direction);
        }

        assert_eq!(seen_terms.len(), 3);
        assert_eq!(seen_directions.len(), 2);
    }

    #[test]
    fn test_draw_from_empty_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(draw_question(&[], &mut rng).is_none());
    }

    #[test]
    fn test_session_scores_answers() {
        let cards = vec![symmetric_card()];
        let pool = QuizScope::All.pool(&cards);
        let mut console = ScriptedConsole::new(&["echo", "wrong", "ECHO"]);
        let mut rng = StdRng::seed_from_u64(42);

        let tally = run_session(&pool, 3, &mut console, &mut rng);

        assert_eq!(tally.correct, 2);
        assert_eq!(tally.answered, 3);
        assert!(!tally.exited_early);
        assert!(tally.should_record());
        assert!(console.transcript().contains("Incorrect. The correct answer is: "));
    }

    #[test]
    fn test_empty_answer_does_not_count() {
        let cards = vec![symmetric_card()];
        let pool = QuizScope::All.pool(&cards);
        let mut console = ScriptedConsole::new(&["", "  ", "echo"]);
        let mut rng = StdRng::seed_from_u64(3);

        let tally = run_session(&pool, 1, &mut console, &mut rng);

        assert_eq!(tally.answered, 1);
        assert_eq!(tally.correct, 1);
        let reprompts = console
            .output
            .iter()
            .filter(|line| line.contains("No answer provided"))
            .count();
        assert_eq!(reprompts, 2);
    }

    #[test]
    fn test_immediate_exit() {
        let cards = vec![symmetric_card()];
        let pool = QuizScope::All.pool(&cards);
        let mut console = ScriptedConsole::new(&["exit", "echo"]);
        let mut rng = StdRng::seed_from_u64(5);

        let tally = run_session(&pool, 3, &mut console, &mut rng);

        assert_eq!(tally.answered, 0);
        assert!(tally.exited_early);
        assert!(!tally.should_record());
        assert_eq!(console.remaining(), 1);
    }

    #[test]
    fn test_exit_after_some_questions() {
        let cards = vec![symmetric_card()];
        let pool = QuizScope::All.pool(&cards);
        let mut console = ScriptedConsole::new(&["echo", "Exit"]);
        let mut rng = StdRng::seed_from_u64(9);

        let tally = run_session(&pool, 5, &mut console, &mut rng);

        assert_eq!(tally.answered, 1);
        assert_eq!(tally.correct, 1);
        assert!(tally.exited_early);
        assert!(tally.should_record());
    }

    #[test]
    fn test_end_of_input_stops_session() {
        let cards = vec![symmetric_card()];
        let pool = QuizScope::All.pool(&cards);
        let mut console = ScriptedConsole::new(&["echo"]);
        let mut rng = StdRng::seed_from_u64(11);

        let tally = run_session(&pool, 4, &mut console, &mut rng);

        assert_eq!(tally.answered, 1);
        assert!(tally.exited_early);
    }
}
