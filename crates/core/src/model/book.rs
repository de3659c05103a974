use thiserror::Error;

use crate::model::ids::BookId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BookError {
    #[error("book title cannot be empty")]
    EmptyTitle,

    #[error("book author cannot be empty")]
    EmptyAuthor,
}

/// Reference data for a book in the catalog.
///
/// Created and updated externally; the dashboard only reads it. The cover is
/// an opaque reference (URL or asset path) and may be empty when the catalog
/// has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    cover: String,
    total_pages: Option<u32>,
}

impl Book {
    /// Creates a new `Book`.
    ///
    /// # Errors
    ///
    /// Returns `BookError` if title or author is empty or whitespace-only.
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        cover: impl Into<String>,
        total_pages: Option<u32>,
    ) -> Result<Self, BookError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(BookError::EmptyTitle);
        }
        let author = author.into();
        if author.trim().is_empty() {
            return Err(BookError::EmptyAuthor);
        }

        Ok(Self {
            id,
            title: title.trim().to_owned(),
            author: author.trim().to_owned(),
            cover: cover.into(),
            total_pages,
        })
    }

    #[must_use]
    pub fn id(&self) -> BookId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Opaque cover reference; empty when none is known.
    #[must_use]
    pub fn cover(&self) -> &str {
        &self.cover
    }

    #[must_use]
    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }
}
