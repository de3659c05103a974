use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::book::Book;
use crate::model::ids::StudentBookId;
use crate::model::session::ReadingSession;
use crate::model::status::ReadingStatus;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StudentBookError {
    #[error("progress must be between 0 and 100, got {0}")]
    ProgressOutOfRange(u8),
}

/// The assignment relationship between a student and a book.
///
/// Carries the reading status, percentage progress and the recorded reading
/// sessions. Sessions are held ordered by date descending; the constructor
/// enforces the ordering so consumers can rely on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentBook {
    id: StudentBookId,
    book: Book,
    status: ReadingStatus,
    progress: u8,
    last_read_date: Option<DateTime<Utc>>,
    assigned_date: DateTime<Utc>,
    sessions: Vec<ReadingSession>,
}

impl StudentBook {
    /// Creates a new `StudentBook`.
    ///
    /// # Errors
    ///
    /// Returns `StudentBookError::ProgressOutOfRange` if progress exceeds 100.
    pub fn new(
        id: StudentBookId,
        book: Book,
        status: ReadingStatus,
        progress: u8,
        last_read_date: Option<DateTime<Utc>>,
        assigned_date: DateTime<Utc>,
        mut sessions: Vec<ReadingSession>,
    ) -> Result<Self, StudentBookError> {
        if progress > 100 {
            return Err(StudentBookError::ProgressOutOfRange(progress));
        }

        // Newest first, stable for equal dates.
        sessions.sort_by(|a, b| b.date().cmp(&a.date()));

        Ok(Self {
            id,
            book,
            status,
            progress,
            last_read_date,
            assigned_date,
            sessions,
        })
    }

    #[must_use]
    pub fn id(&self) -> StudentBookId {
        self.id
    }

    #[must_use]
    pub fn book(&self) -> &Book {
        &self.book
    }

    #[must_use]
    pub fn status(&self) -> ReadingStatus {
        self.status
    }

    /// Completion percentage in `0..=100`.
    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    #[must_use]
    pub fn last_read_date(&self) -> Option<DateTime<Utc>> {
        self.last_read_date
    }

    #[must_use]
    pub fn assigned_date(&self) -> DateTime<Utc> {
        self.assigned_date
    }

    /// Recorded sessions, newest first.
    #[must_use]
    pub fn sessions(&self) -> &[ReadingSession] {
        &self.sessions
    }
}
