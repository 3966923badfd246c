use dialoguer::{theme::ColorfulTheme, FuzzySelect, Input};
use eyre::{eyre, Context, Result};

use bookinfo::{normalize, Book};

/// Number of titles visible at once in the selection list.
const SELECT_PAGE_SIZE: usize = 10;

pub fn user_search_title() -> Result<String> {
    // keep asking until the input normalizes to a non-empty term
    loop {
        let raw: String = Input::new()
            .with_prompt("Enter a string to search for a book by title.")
            .allow_empty(true)
            .interact_text()
            .wrap_err_with(|| eyre!("User input cancelled"))?;

        let term = normalize::search_term(&raw);
        if !term.is_empty() {
            return Ok(term);
        }
        println!("A search string is required.");
    }
}

pub fn user_select_book(mut books: Vec<Book>) -> Result<Book> {
    let items = book_titles(&books);
    user_select("Which book? (type to search, enter to select)", &items).map(|i| books.remove(i))
}

fn user_select<S: ToString>(prompt: &str, items: &[S]) -> Result<usize> {
    let selection = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(0)
        .items(items)
        .max_length(SELECT_PAGE_SIZE)
        .interact_opt()
        .wrap_err_with(|| eyre!("User selection cancelled"))?;

    if let Some(index) = selection {
        Ok(index)
    } else {
        Err(eyre!("No selection made - cancelling operation"))
    }
}

fn book_titles(books: &[Book]) -> Vec<String> {
    books.iter().map(|b| b.title.clone()).collect()
}

#[test]
fn choice_labels_follow_the_search_order() {
    let books = vec![
        Book {
            id: 3,
            title: "Harry Potter and the Chamber of Secrets".to_owned(),
        },
        Book {
            id: 5,
            title: "Harry Potter and the Goblet of Fire".to_owned(),
        },
        Book {
            id: 1,
            title: "Harry Potter and the Sorcerer's Stone".to_owned(),
        },
    ];

    assert_eq!(
        vec![
            "Harry Potter and the Chamber of Secrets",
            "Harry Potter and the Goblet of Fire",
            "Harry Potter and the Sorcerer's Stone",
        ],
        book_titles(&books)
    );
}
