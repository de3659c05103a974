use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use bookworm_core::model::{
    AccountId, Book, BookId, ReadingSession, ReadingStatus, SessionId, Student, StudentBook,
    StudentBookId, StudentId,
};

/// Errors surfaced by data-access adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Raw student row as the data service returns it.
#[derive(Debug, Clone)]
pub struct StudentRecord {
    pub id: StudentId,
    pub name: String,
    pub avatar: Option<String>,
}

impl StudentRecord {
    /// Assemble the domain aggregate from this record and its fetched books.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` when the record fails domain
    /// validation (e.g. an empty name).
    pub fn into_student(self, books: Vec<StudentBook>) -> Result<Student, StorageError> {
        Student::new(self.id, self.name, self.avatar, books).map_err(ser)
    }
}

/// Book reference data embedded in a student-book row.
#[derive(Debug, Clone)]
pub struct BookRecord {
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Already normalized: a missing cover is an empty string.
    pub cover: String,
    pub total_pages: Option<u32>,
}

/// Raw book-assignment row, with the joined book embedded.
#[derive(Debug, Clone)]
pub struct StudentBookRecord {
    pub id: StudentBookId,
    pub student_id: StudentId,
    pub book: BookRecord,
    pub status: ReadingStatus,
    pub progress: u8,
    pub last_read_date: Option<DateTime<Utc>>,
    pub assigned_date: DateTime<Utc>,
}

impl StudentBookRecord {
    /// Convert the record and its fetched sessions into a domain
    /// `StudentBook`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` when the book or assignment
    /// fails domain validation (empty title, progress out of range).
    pub fn into_student_book(
        self,
        sessions: Vec<ReadingSession>,
    ) -> Result<StudentBook, StorageError> {
        let book = Book::new(
            self.book.id,
            self.book.title,
            self.book.author,
            self.book.cover,
            self.book.total_pages,
        )
        .map_err(ser)?;

        StudentBook::new(
            self.id,
            book,
            self.status,
            self.progress,
            self.last_read_date,
            self.assigned_date,
            sessions,
        )
        .map_err(ser)
    }
}

/// Raw reading-session row.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub id: SessionId,
    pub student_book_id: StudentBookId,
    pub date: DateTime<Utc>,
    pub pages_read: u32,
    pub time_spent_mins: u32,
    pub notes: Option<String>,
}

impl SessionRecord {
    #[must_use]
    pub fn into_session(self) -> ReadingSession {
        ReadingSession::new(
            self.id,
            self.date,
            self.pages_read,
            self.time_spent_mins,
            self.notes,
        )
    }
}

/// Students owned by one teacher account.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// List all students for the account. An empty roster is a valid result.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the query fails.
    async fn list_students(&self, account: AccountId) -> Result<Vec<StudentRecord>, StorageError>;
}

/// Book assignments per student, with the referenced book embedded.
#[async_trait]
pub trait StudentBookRepository: Send + Sync {
    /// List the assignments of one student.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the query fails.
    async fn list_books_for_student(
        &self,
        student: StudentId,
    ) -> Result<Vec<StudentBookRecord>, StorageError>;
}

/// Reading sessions per book assignment.
#[async_trait]
pub trait ReadingSessionRepository: Send + Sync {
    /// List the sessions of one assignment, ordered by date descending.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the query fails.
    async fn list_sessions_for_book(
        &self,
        book: StudentBookId,
    ) -> Result<Vec<SessionRecord>, StorageError>;
}

/// Simple in-memory store for tests and the offline demo.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    students: Arc<Mutex<Vec<(AccountId, StudentRecord)>>>,
    books: Arc<Mutex<Vec<StudentBookRecord>>>,
    sessions: Arc<Mutex<Vec<SessionRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a student row under the given account.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn seed_student(&self, account: AccountId, record: StudentRecord) {
        self.students
            .lock()
            .expect("in-memory store lock poisoned")
            .push((account, record));
    }

    /// Insert a book-assignment row.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn seed_book(&self, record: StudentBookRecord) {
        self.books
            .lock()
            .expect("in-memory store lock poisoned")
            .push(record);
    }

    /// Insert a session row.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn seed_session(&self, record: SessionRecord) {
        self.sessions
            .lock()
            .expect("in-memory store lock poisoned")
            .push(record);
    }
}

#[async_trait]
impl StudentRepository for InMemoryRepository {
    async fn list_students(&self, account: AccountId) -> Result<Vec<StudentRecord>, StorageError> {
        let guard = self
            .students
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard
            .iter()
            .filter(|(owner, _)| *owner == account)
            .map(|(_, record)| record.clone())
            .collect())
    }
}

#[async_trait]
impl StudentBookRepository for InMemoryRepository {
    async fn list_books_for_student(
        &self,
        student: StudentId,
    ) -> Result<Vec<StudentBookRecord>, StorageError> {
        let guard = self
            .books
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard
            .iter()
            .filter(|record| record.student_id == student)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ReadingSessionRepository for InMemoryRepository {
    async fn list_sessions_for_book(
        &self,
        book: StudentBookId,
    ) -> Result<Vec<SessionRecord>, StorageError> {
        let guard = self
            .sessions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut rows: Vec<SessionRecord> = guard
            .iter()
            .filter(|record| record.student_book_id == book)
            .cloned()
            .collect();
        // Same contract as the remote service: newest first.
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }
}

/// Aggregates the three repositories behind trait objects for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub students: Arc<dyn StudentRepository>,
    pub student_books: Arc<dyn StudentBookRepository>,
    pub sessions: Arc<dyn ReadingSessionRepository>,
}

impl Storage {
    /// Build a `Storage` backed by the given in-memory store.
    #[must_use]
    pub fn in_memory(repo: InMemoryRepository) -> Self {
        let students: Arc<dyn StudentRepository> = Arc::new(repo.clone());
        let student_books: Arc<dyn StudentBookRepository> = Arc::new(repo.clone());
        let sessions: Arc<dyn ReadingSessionRepository> = Arc::new(repo);
        Self {
            students,
            student_books,
            sessions,
        }
    }
}
