//! Domain model for rows read from the book catalog.

/// A single row from the `books` table of the catalog.
///
/// Only the two columns needed to disambiguate a title search are read; any
/// other columns in the store are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Primary key in the catalog. Selection flows hand this identifier back
    /// to the caller once the user has picked a title.
    pub id: i64,
    /// Title shown in search results and selection lists.
    pub title: String,
}
