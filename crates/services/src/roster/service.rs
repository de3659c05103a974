use chrono::{DateTime, NaiveDate, Utc};
use futures_util::future::try_join_all;

use bookworm_core::Clock;
use bookworm_core::model::{AccountId, Student, StudentBook};
use storage::repository::{SessionRecord, Storage, StudentBookRecord, StudentRecord};

use crate::error::RosterError;

/// Loads the full roster snapshot for one teacher account.
///
/// This service owns:
/// - the time source (`Clock`)
/// - repository access
///
/// It does **not** own UI formatting. The snapshot it returns is treated as
/// immutable for the duration of one render cycle; a fresh load replaces it
/// wholesale.
#[derive(Clone)]
pub struct RosterService {
    clock: Clock,
    account: AccountId,
    storage: Storage,
}

impl RosterService {
    #[must_use]
    pub fn new(clock: Clock, account: AccountId, storage: Storage) -> Self {
        Self {
            clock,
            account,
            storage,
        }
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// The calendar day that ends "recent activity" windows.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    #[must_use]
    pub fn account(&self) -> AccountId {
        self.account
    }

    /// Fetch and assemble the full student roster.
    ///
    /// Book fetches fan out concurrently per student and session fetches per
    /// book (one in-flight request each). A failure at any level aborts the
    /// whole load; no partial students are returned.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::DataUnavailable` when any fetch or record
    /// conversion fails.
    pub async fn load_roster(&self) -> Result<Vec<Student>, RosterError> {
        let records = self.storage.students.list_students(self.account).await?;
        let students = try_join_all(records.into_iter().map(|r| self.load_student(r))).await?;
        Ok(students)
    }

    async fn load_student(&self, record: StudentRecord) -> Result<Student, RosterError> {
        let book_records = self
            .storage
            .student_books
            .list_books_for_student(record.id)
            .await?;
        let books = try_join_all(book_records.into_iter().map(|r| self.load_book(r))).await?;
        Ok(record.into_student(books)?)
    }

    async fn load_book(&self, record: StudentBookRecord) -> Result<StudentBook, RosterError> {
        let session_records = self
            .storage
            .sessions
            .list_sessions_for_book(record.id)
            .await?;
        let sessions = session_records
            .into_iter()
            .map(SessionRecord::into_session)
            .collect();
        Ok(record.into_student_book(sessions)?)
    }
}
