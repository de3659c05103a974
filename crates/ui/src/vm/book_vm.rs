use bookworm_core::model::{ReadingSession, StudentBook, StudentBookId};
use services::BookStatsItem;

use crate::vm::status_vm::{status_class, status_label};
use crate::vm::time_fmt::{day_label, format_date};

/// One assigned-book row on the student detail screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookRowVm {
    pub id: StudentBookId,
    pub title: String,
    pub author: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub progress: u8,
    pub assigned_str: String,
    pub last_read_str: Option<String>,
}

impl From<&StudentBook> for BookRowVm {
    fn from(book: &StudentBook) -> Self {
        Self {
            id: book.id(),
            title: book.book().title().to_owned(),
            author: book.book().author().to_owned(),
            status_label: status_label(book.status()),
            status_class: status_class(book.status()),
            progress: book.progress(),
            assigned_str: format_date(book.assigned_date()),
            last_read_str: book.last_read_date().map(format_date),
        }
    }
}

/// Convert a student's assignments into detail rows.
#[must_use]
pub fn map_book_rows(books: &[StudentBook]) -> Vec<BookRowVm> {
    books.iter().map(BookRowVm::from).collect()
}

/// One recorded session on the book detail screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionVm {
    pub date_str: String,
    pub minutes: u32,
    pub pages: u32,
    pub notes: Option<String>,
}

impl From<&ReadingSession> for SessionVm {
    fn from(session: &ReadingSession) -> Self {
        Self {
            date_str: format_date(session.date()),
            minutes: session.time_spent_mins(),
            pages: session.pages_read(),
            notes: session.notes().map(str::to_owned),
        }
    }
}

/// One day of the recent-activity strip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayActivityVm {
    pub label: String,
    pub pages: u32,
}

/// Everything the book detail screen renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookDetailVm {
    pub title: String,
    pub author: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub progress: u8,
    pub total_hours: u32,
    pub total_pages: u32,
    pub session_count: usize,
    pub avg_minutes: u32,
    pub activity: Vec<DayActivityVm>,
    pub sessions: Vec<SessionVm>,
}

impl BookDetailVm {
    #[must_use]
    pub fn from_book(book: &StudentBook, stats: &BookStatsItem) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let total_hours = (f64::from(stats.totals.total_minutes) / 60.0).round() as u32;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let avg_minutes = stats.totals.avg_minutes.round() as u32;

        Self {
            title: book.book().title().to_owned(),
            author: book.book().author().to_owned(),
            status_label: status_label(book.status()),
            status_class: status_class(book.status()),
            progress: book.progress(),
            total_hours,
            total_pages: stats.totals.total_pages,
            session_count: stats.totals.count,
            avg_minutes,
            activity: stats
                .recent_activity
                .iter()
                .map(|day| DayActivityVm {
                    label: day_label(day.day),
                    pages: day.pages,
                })
                .collect(),
            // Sessions are already newest first on the domain type.
            sessions: book.sessions().iter().map(SessionVm::from).collect(),
        }
    }
}
