//! SQLite-backed access to the book ratings catalog.
//!
//! The catalog lives at a fixed location under the user's home directory and
//! is only ever read, so connections are opened read-only and the handle is
//! passed explicitly into the query functions.

use std::path::PathBuf;

use directories::BaseDirs;
use log::trace;
use rusqlite::{Connection, OpenFlags};

use crate::error::{Error, ErrorKind};
use crate::model::Book;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".bookinfo";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "bookratings.sqlite";

pub(crate) fn open_default() -> Result<Connection, Error> {
    let db_path = db_path()?;
    trace!("Opening the book catalog at '{}'", db_path.display());

    Connection::open_with_flags(
        &db_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| Error::wrap(ErrorKind::Connection, e))
}

/// Resolve the absolute path to the SQLite catalog inside the user's home.
fn db_path() -> Result<PathBuf, Error> {
    let base_dirs = BaseDirs::new()
        .ok_or_else(|| Error::new(ErrorKind::Connection, "could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}

pub(crate) fn books_by_title(conn: &Connection, title: &str) -> Result<Vec<Book>, Error> {
    let mut stmt = conn
        .prepare(
            "SELECT id, title FROM books
             WHERE lower(title) LIKE '%' || ?1 || '%' ESCAPE '\\'
             ORDER BY title",
        )
        .map_err(|e| Error::wrap(ErrorKind::Query, e))?;

    let books = stmt
        .query_map([escape_like(title)], |row| {
            Ok(Book {
                id: row.get(0)?,
                title: row.get(1)?,
            })
        })
        .map_err(|e| Error::wrap(ErrorKind::Query, e))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| Error::wrap(ErrorKind::Query, e))?;

    Ok(books)
}

// The term is bound as a parameter so it can never change the shape of the
// query, but `%` and `_` still act as wildcards inside a LIKE pattern.
// Escaping them keeps every character of the term literal.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    use rusqlite::params;

    fn catalog(rows: &[(i64, &str)]) -> Connection {
        let conn = Connection::open_in_memory().expect("in-memory database");
        conn.execute(
            "CREATE TABLE books (id INTEGER PRIMARY KEY, title TEXT NOT NULL)",
            [],
        )
        .unwrap();

        for (id, title) in rows {
            conn.execute(
                "INSERT INTO books (id, title) VALUES (?1, ?2)",
                params![id, title],
            )
            .unwrap();
        }
        conn
    }

    #[test]
    fn matches_are_case_insensitive_and_title_ordered() {
        let conn = catalog(&[
            (1, "Harry Potter and the Sorcerer's Stone"),
            (5, "Harry Potter and the Goblet of Fire"),
            (3, "Harry Potter and the Chamber of Secrets"),
            (7, "Dune"),
        ]);

        let books = books_by_title(&conn, "harry").unwrap();

        let titles = books.iter().map(|b| b.title.as_str()).collect::<Vec<_>>();
        assert_eq!(
            vec![
                "Harry Potter and the Chamber of Secrets",
                "Harry Potter and the Goblet of Fire",
                "Harry Potter and the Sorcerer's Stone",
            ],
            titles
        );
        assert_eq!(vec![3, 5, 1], books.iter().map(|b| b.id).collect::<Vec<_>>());
    }

    #[test]
    fn no_matches_returns_an_empty_set() {
        let conn = catalog(&[(7, "Dune")]);

        assert!(books_by_title(&conn, "zzzzznotabook").unwrap().is_empty());
    }

    #[test]
    fn like_wildcards_match_literally() {
        let conn = catalog(&[(1, "100% Wolf"), (2, "Wolf Hall"), (3, "My_Book")]);

        // '%' would otherwise match every row
        let books = books_by_title(&conn, "%").unwrap();
        assert_eq!(vec![1], books.iter().map(|b| b.id).collect::<Vec<_>>());

        // '_' would otherwise match any single character
        let books = books_by_title(&conn, "_").unwrap();
        assert_eq!(vec![3], books.iter().map(|b| b.id).collect::<Vec<_>>());
    }

    #[test]
    fn quotes_and_statement_characters_are_plain_text() {
        let conn = catalog(&[(1, "Harry Potter and the Sorcerer's Stone")]);

        assert_eq!(1, books_by_title(&conn, "sorcerer's").unwrap().len());
        assert!(books_by_title(&conn, "'; drop table books; --")
            .unwrap()
            .is_empty());

        // the books table is still intact afterwards
        assert_eq!(1, books_by_title(&conn, "stone").unwrap().len());
    }

    #[test]
    fn catalog_without_a_books_table_rejects_the_query() {
        let conn = Connection::open_in_memory().expect("in-memory database");

        let err = books_by_title(&conn, "dune").unwrap_err();
        assert_eq!(ErrorKind::Query, err.kind());
    }
}
