#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

//! # bookinfo
//!
//! bookinfo is a library which supports searching the local book ratings
//! catalog for books by title. The catalog is an SQLite database read through
//! an explicit [`Connection`] handle, and searches return the [`Book`] rows a
//! front end needs in order to let a user disambiguate between several
//! matching titles.

mod error;
mod store;

pub mod model;
pub mod normalize;

pub use error::{Error, ErrorKind};
pub use model::Book;
pub use rusqlite::Connection;

use log::trace;

/// Open the book ratings catalog from its fixed location on disk.
///
/// The catalog is opened read-only and the returned handle is expected to
/// live for the rest of the process, passed by reference into
/// [`books_by_title`].
///
/// # Errors
///
/// An [`Err`] of the [`ErrorKind::Connection`] kind is returned when the home
/// directory cannot be resolved or when the database file is missing or
/// cannot be opened.
#[inline]
pub fn open_default() -> Result<Connection, Error> {
    store::open_default()
}

/// Search for books whose title contains `title`, case-insensitively.
///
/// The rows are returned in ascending title order and the result may be
/// empty. The search term is bound as a query parameter and `LIKE`
/// metacharacters in it are escaped, so every character of the term matches
/// literally.
///
/// # Errors
///
/// An [`Err`] of the [`ErrorKind::Query`] kind is returned when the store
/// rejects the query, for example when the catalog has no `books` table.
#[inline]
pub fn books_by_title(conn: &Connection, title: &str) -> Result<Vec<Book>, Error> {
    trace!("Search books with a title containing '{title}'");
    store::books_by_title(conn, title)
}
