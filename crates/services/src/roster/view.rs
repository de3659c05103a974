use chrono::{DateTime, NaiveDate, Utc};

use bookworm_core::model::{Student, StudentBook, StudentId};
use bookworm_core::stats::{self, ClassOverview, ClassTier, DailyPages, SessionTotals};

/// The currently-reading slice of one student row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentBookItem {
    pub title: String,
    pub progress: u8,
    pub last_read_date: Option<DateTime<Utc>>,
}

/// Presentation-agnostic overview row for one student.
///
/// This is intentionally **not** a UI view-model:
/// - no pre-formatted strings
/// - no localization assumptions
///
/// The UI formats dates and labels as needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentOverviewItem {
    pub id: StudentId,
    pub name: String,
    pub avatar: Option<String>,
    pub book_count: usize,
    pub completed: u32,
    pub active: u32,
    pub average_progress: u8,
    pub currently_reading: Option<CurrentBookItem>,
}

impl StudentOverviewItem {
    #[must_use]
    pub fn from_student(student: &Student) -> Self {
        let currently_reading = stats::currently_reading(student).map(|book| CurrentBookItem {
            title: book.book().title().to_owned(),
            progress: book.progress(),
            last_read_date: book.last_read_date(),
        });

        Self {
            id: student.id(),
            name: student.name().to_owned(),
            avatar: student.avatar().map(str::to_owned),
            book_count: student.books().len(),
            completed: stats::total_books_completed(student),
            active: stats::active_books(student),
            average_progress: stats::average_progress(student),
            currently_reading,
        }
    }
}

/// Convert a roster snapshot into overview rows.
#[must_use]
pub fn map_student_overview(students: &[Student]) -> Vec<StudentOverviewItem> {
    students.iter().map(StudentOverviewItem::from_student).collect()
}

/// Session aggregates and recent activity for the book-detail header.
#[derive(Debug, Clone, PartialEq)]
pub struct BookStatsItem {
    pub totals: SessionTotals,
    pub recent_activity: Vec<DailyPages>,
}

/// Days of activity shown in the book-detail strip.
const ACTIVITY_WINDOW_DAYS: u32 = 7;

impl BookStatsItem {
    #[must_use]
    pub fn from_book(book: &StudentBook, today: NaiveDate) -> Self {
        Self {
            totals: stats::session_totals(book),
            recent_activity: stats::daily_pages(book.sessions(), today, ACTIVITY_WINDOW_DAYS),
        }
    }
}

/// Headline numbers plus the narrative tier for the overview screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSummaryItem {
    pub overview: ClassOverview,
    pub tier: ClassTier,
}

impl ClassSummaryItem {
    #[must_use]
    pub fn from_students(students: &[Student]) -> Self {
        Self {
            overview: ClassOverview::from_students(students),
            tier: stats::class_tier(students),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookworm_core::model::{
        Book, BookId, ReadingSession, ReadingStatus, SessionId, StudentBook, StudentBookId,
    };
    use bookworm_core::time::fixed_now;
    use chrono::Duration;
    use uuid::Uuid;

    fn assignment(status: ReadingStatus, progress: u8) -> StudentBook {
        let book = Book::new(
            BookId::new(Uuid::from_u128(1)),
            "To Kill a Mockingbird",
            "Harper Lee",
            "",
            Some(376),
        )
        .unwrap();
        StudentBook::new(
            StudentBookId::new(Uuid::from_u128(1)),
            book,
            status,
            progress,
            Some(fixed_now()),
            fixed_now(),
            vec![
                ReadingSession::new(
                    SessionId::new(Uuid::from_u128(1)),
                    fixed_now(),
                    25,
                    45,
                    None,
                ),
                ReadingSession::new(
                    SessionId::new(Uuid::from_u128(2)),
                    fixed_now() - Duration::days(2),
                    30,
                    60,
                    None,
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn overview_item_is_presentation_agnostic() {
        let student = Student::new(
            StudentId::new(Uuid::from_u128(9)),
            "Emma Watson",
            None,
            vec![assignment(ReadingStatus::Reading, 65)],
        )
        .unwrap();

        let item = StudentOverviewItem::from_student(&student);

        assert_eq!(item.name, "Emma Watson");
        assert_eq!(item.book_count, 1);
        assert_eq!(item.completed, 0);
        assert_eq!(item.active, 1);
        assert_eq!(item.average_progress, 65);
        let current = item.currently_reading.unwrap();
        assert_eq!(current.title, "To Kill a Mockingbird");
        assert_eq!(current.progress, 65);
    }

    #[test]
    fn book_stats_cover_the_activity_window() {
        let book = assignment(ReadingStatus::Reading, 65);
        let item = BookStatsItem::from_book(&book, fixed_now().date_naive());

        assert_eq!(item.totals.total_pages, 55);
        assert_eq!(item.totals.count, 2);
        assert_eq!(item.recent_activity.len(), 7);
        assert_eq!(item.recent_activity[6].pages, 25);
        assert_eq!(item.recent_activity[4].pages, 30);
    }

    #[test]
    fn class_summary_from_empty_roster() {
        let item = ClassSummaryItem::from_students(&[]);
        assert_eq!(item.overview.students, 0);
        assert_eq!(item.tier, ClassTier::GettingStarted);
    }
}
