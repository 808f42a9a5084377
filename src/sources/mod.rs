/*! Text sources.

A [Source] provides the catalog page and the raw text of each book.
[Gutenberg] fetches them over HTTP; tests use in-memory implementations.
!*/
mod gutenberg;

pub use gutenberg::Gutenberg;

use crate::error::Error;
use crate::types::BookId;

/// Catalog and document retrieval.
///
/// Implementors are shared between workers, hence the [Sync] bound.
pub trait Source: Sync {
    /// Get the HTML catalog page.
    fn catalog(&self) -> Result<String, Error>;

    /// Get the plain text of the book identified by `id`.
    fn document(&self, id: BookId) -> Result<String, Error>;
}
