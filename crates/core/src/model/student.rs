use thiserror::Error;

use crate::model::ids::StudentId;
use crate::model::student_book::StudentBook;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StudentError {
    #[error("student name cannot be empty")]
    EmptyName,
}

/// A learner tracked by the dashboard, owning a set of assigned books.
///
/// The aggregate root of one fetched snapshot. Summary statistics
/// (completed count, average progress, currently-reading selection) are not
/// stored here; they are recomputed from the books by [`crate::stats`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: StudentId,
    name: String,
    avatar: Option<String>,
    books: Vec<StudentBook>,
}

impl Student {
    /// Creates a new `Student`.
    ///
    /// # Errors
    ///
    /// Returns `StudentError::EmptyName` if the name is empty or
    /// whitespace-only.
    pub fn new(
        id: StudentId,
        name: impl Into<String>,
        avatar: Option<String>,
        books: Vec<StudentBook>,
    ) -> Result<Self, StudentError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StudentError::EmptyName);
        }

        let avatar = avatar
            .map(|a| a.trim().to_owned())
            .filter(|a| !a.is_empty());

        Ok(Self {
            id,
            name: name.trim().to_owned(),
            avatar,
            books,
        })
    }

    #[must_use]
    pub fn id(&self) -> StudentId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    #[must_use]
    pub fn books(&self) -> &[StudentBook] {
        &self.books
    }
}
