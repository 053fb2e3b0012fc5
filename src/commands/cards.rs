//! Interactive card management: add, view, edit and delete

use crate::console::Console;
use crate::flashcards::{CardStore, CardUpdate, Flashcard, LoadStatus};

/// Load the card file, telling the user what was found
pub fn load_cards(store: &mut CardStore, console: &mut dyn Console) {
    match store.load() {
        LoadStatus::Loaded(count) => console.write_line(&format!(
            "\nQuiz Cards loaded successfully ({} cards).",
            count
        )),
        LoadStatus::Missing => {
            console.write_line("\nNo saved Quiz Cards found. Starting with an empty list.")
        }
        LoadStatus::Corrupt(_) => {
            console.print_error("Corrupted file. Starting with an empty list.")
        }
    }
}

/// Persist the card list. A failed write is reported and the in-memory list kept.
pub fn save_cards(store: &CardStore, console: &mut dyn Console) {
    match store.save() {
        Ok(()) => console.write_line("\nQuiz Cards saved successfully."),
        Err(e) => {
            log::warn!("Failed to save cards to {:?}: {}", store.path(), e);
            console.print_error("Unable to save Quiz Cards.");
        }
    }
}

fn describe(card: &Flashcard) -> String {
    format!(
        "Term: {}\nDefinition: {}\nCategory: {}",
        card.term,
        card.definition,
        card.effective_category()
    )
}

fn print_numbered(console: &mut dyn Console, cards: &[&Flashcard]) {
    for (i, card) in cards.iter().enumerate() {
        console.write_line(&format!("\n{}. {}", i + 1, describe(card)));
    }
}

/// Show every card numbered by its position and ask for one of those numbers
fn select_card(store: &CardStore, console: &mut dyn Console, prompt: &str) -> Option<usize> {
    console.write_line("All Quiz Cards:");
    print_numbered(console, &store.filter_by_category(None));
    console.choose_number(prompt, 1, store.len())
}

pub fn add_card(store: &mut CardStore, console: &mut dyn Console) {
    console.print_section_title("Add a New Quiz Card");
    console.write_line(
        "You'll be asked to enter a term/question followed by its definition/answer, \
         and an optional category.",
    );
    console.write_line(concat!(
        "\nExample:\n\nTerm = Python\n",
        "Definition = A high-level programming language\n",
        "Category = Programming",
    ));

    let Some(term) = console.ask("\nEnter the term/question:") else {
        return;
    };
    let Some(definition) = console.ask("Enter the definition/answer:") else {
        return;
    };

    let categories = store.list_categories();
    if !categories.is_empty() {
        let names: Vec<&str> = categories.iter().map(String::as_str).collect();
        console.write_line(&format!("Available categories: {}", names.join(", ")));
    }
    let Some(category) = console.ask("Enter the category (or press Enter to skip):") else {
        return;
    };

    let card = Flashcard::new(&term, &definition, &category);
    if !card.is_complete() {
        console.print_error("Both term and definition are required.");
        console.write_line("\nReturning to Previous Menu...");
        return;
    }

    console.write_line(&format!("\nYou entered:\n{}", describe(&card)));
    match console.confirm("\nDo you want to add this Quiz Card? (yes/no):") {
        Some(true) => {}
        Some(false) => {
            console.write_line("\nQuiz Card not added.");
            return;
        }
        None => return,
    }

    match store.add(card) {
        Ok(card) => {
            log::info!("Added card '{}' in '{}'", card.term, card.category);
            console.print_success("Quiz Card added successfully!");
            save_cards(store, console);
        }
        Err(e) => console.print_error(&e.to_string()),
    }
}

pub fn view_cards(store: &CardStore, console: &mut dyn Console) {
    console.print_section_title("View Quiz Cards");
    if store.is_empty() {
        console.write_line("No Quiz Cards available.");
        console.write_line("\nReturning to Previous Menu...");
        return;
    }

    loop {
        let categories = store.effective_categories();
        let view_all = categories.len() + 1;
        let back = categories.len() + 2;

        console.write_line("Available Categories:\n");
        for (i, category) in categories.iter().enumerate() {
            console.write_line(&format!("{}. {}", i + 1, category));
        }
        console.write_line(&format!("{}. View All Quiz Cards", view_all));
        console.write_line(&format!("{}. Return to Quiz Card Management", back));

        let Some(selection) = console.choose_number(
            "\nSelect a category by number (or choose 'View All Quiz Cards'):",
            1,
            back,
        ) else {
            return;
        };

        if selection == back {
            break;
        }

        if selection == view_all {
            console.write_line("\nAll Quiz Cards:");
            print_numbered(console, &store.filter_by_category(None));
        } else {
            let category = &categories[selection - 1];
            console.write_line(&format!("\nQuiz Cards in category '{}':", category));
            print_numbered(console, &store.filter_by_category(Some(category)));
        }

        match console.confirm(
            "\nWould you like to view other flashcards? (yes to continue, no to return):",
        ) {
            Some(true) => continue,
            Some(false) => break,
            None => return,
        }
    }

    console.write_line("\nReturning to Previous Menu...");
}

pub fn edit_card(store: &mut CardStore, console: &mut dyn Console) {
    console.print_section_title("Edit a Quiz Card");
    if store.is_empty() {
        console.write_line("No Quiz Cards available to edit.");
        console.write_line("\nReturning to Previous Menu...");
        return;
    }

    let Some(number) = select_card(
        store,
        console,
        "\nEnter the number of the Quiz Card you want to edit:",
    ) else {
        return;
    };
    let current = match store.get(number) {
        Ok(card) => card.clone(),
        Err(e) => {
            console.print_error(&e.to_string());
            return;
        }
    };

    console.write_line(&format!(
        "\nSelected Quiz Card: Term = '{}', Definition = '{}', Category = '{}'",
        current.term,
        current.definition,
        current.effective_category()
    ));
    match console.confirm("\nDo you want to edit this Quiz Card? (yes/no):") {
        Some(true) => {}
        Some(false) => {
            console.write_line("\nEdit cancelled.");
            return;
        }
        None => return,
    }

    let Some(term) = console.ask("Enter new term (or press Enter to keep current term):") else {
        return;
    };
    let Some(definition) =
        console.ask("Enter new definition (or press Enter to keep current definition):")
    else {
        return;
    };
    let Some(category) =
        console.ask("Enter new category (or press Enter to keep current category):")
    else {
        return;
    };

    let update = CardUpdate::from_input(&term, &definition, &category);
    if update.is_empty() {
        console.write_line("\nNo changes entered. Quiz Card unchanged.");
        return;
    }
    let preview = update.apply(&current);
    console.write_line(&format!("\nUpdated Quiz Card:\n{}", describe(&preview)));

    match console.confirm("\nDo you want to save these changes? (yes/no):") {
        Some(true) => {}
        Some(false) => {
            console.write_line("\nChanges not saved.");
            return;
        }
        None => return,
    }

    match store.update(number, &update) {
        Ok(_) => {
            log::info!("Updated card {}", number);
            console.print_success("Quiz Card updated successfully!");
            save_cards(store, console);
        }
        Err(e) => console.print_error(&e.to_string()),
    }
}

pub fn delete_card(store: &mut CardStore, console: &mut dyn Console) {
    console.print_section_title("Delete a Quiz Card");
    if store.is_empty() {
        console.write_line("No Quiz Cards to delete.");
        console.write_line("\nReturning to Previous Menu...");
        return;
    }

    let Some(number) = select_card(store, console, "\nEnter the number of the Quiz Card to delete:")
    else {
        return;
    };
    match store.get(number) {
        Ok(card) => {
            let text = format!("\nSelected Quiz Card:\n{}", describe(card));
            console.write_line(&text);
        }
        Err(e) => {
            console.print_error(&e.to_string());
            return;
        }
    }

    match console.confirm("\nAre you sure you want to delete this flashcard? (yes/no):") {
        Some(true) => {}
        Some(false) => {
            console.write_line("\nQuiz Card not deleted.");
            return;
        }
        None => return,
    }

    match store.delete(number) {
        Ok(card) => {
            log::info!("Deleted card '{}'", card.term);
            console.print_success("Quiz Card deleted successfully.");
            save_cards(store, console);
        }
        Err(e) => console.print_error(&e.to_string()),
    }
}
