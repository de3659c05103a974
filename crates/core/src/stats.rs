//! Pure aggregation over a fetched roster snapshot.
//!
//! Everything here is a deterministic function of its inputs: no I/O, no
//! clock reads, no hidden state. Derived values are recomputed on every
//! snapshot instead of being stored on the entities.

use chrono::{Duration, NaiveDate};

use crate::model::{ReadingSession, ReadingStatus, Student, StudentBook};

/// Books a student is nominally expected to finish; the denominator of the
/// class completion rate.
pub const TARGET_BOOKS_PER_STUDENT: u32 = 5;

/// Count of a student's books with status `completed`.
#[must_use]
pub fn total_books_completed(student: &Student) -> u32 {
    let completed = student
        .books()
        .iter()
        .filter(|b| b.status() == ReadingStatus::Completed)
        .count();
    u32::try_from(completed).unwrap_or(u32::MAX)
}

/// Rounded mean progress over all of a student's books, 0 when none.
#[must_use]
pub fn average_progress(student: &Student) -> u8 {
    let books = student.books();
    if books.is_empty() {
        return 0;
    }
    let sum: u32 = books.iter().map(|b| u32::from(b.progress())).sum();
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mean = (f64::from(sum) / books.len() as f64).round() as u8;
    mean
}

/// The book the student is actively reading, picked by the most recent
/// `last_read_date`.
///
/// A missing date sorts earliest. On equal dates the first book in
/// collection order wins. `None` when nothing has status `reading`.
#[must_use]
pub fn currently_reading(student: &Student) -> Option<&StudentBook> {
    let mut best: Option<&StudentBook> = None;
    for book in student.books() {
        if book.status() != ReadingStatus::Reading {
            continue;
        }
        match best {
            None => best = Some(book),
            Some(current) => {
                if book.last_read_date() > current.last_read_date() {
                    best = Some(book);
                }
            }
        }
    }
    best
}

/// Count of books with status `reading`.
#[must_use]
pub fn active_books(student: &Student) -> u32 {
    let active = student
        .books()
        .iter()
        .filter(|b| b.status() == ReadingStatus::Reading)
        .count();
    u32::try_from(active).unwrap_or(u32::MAX)
}

/// Session aggregates for one book assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionTotals {
    pub total_pages: u32,
    pub total_minutes: u32,
    pub count: usize,
    pub avg_minutes: f64,
}

/// Sum of pages and minutes over a book's sessions, plus the mean session
/// length (0 when there are no sessions).
#[must_use]
pub fn session_totals(book: &StudentBook) -> SessionTotals {
    let sessions = book.sessions();
    let total_pages = sessions.iter().map(ReadingSession::pages_read).sum();
    let total_minutes: u32 = sessions.iter().map(ReadingSession::time_spent_mins).sum();
    let count = sessions.len();
    #[allow(clippy::cast_precision_loss)]
    let avg_minutes = if count == 0 {
        0.0
    } else {
        f64::from(total_minutes) / count as f64
    };

    SessionTotals {
        total_pages,
        total_minutes,
        count,
        avg_minutes,
    }
}

/// Roster-wide headline numbers for the overview screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassOverview {
    pub students: usize,
    pub total_books: usize,
    pub completed_books: u32,
    pub average_progress: u8,
}

impl ClassOverview {
    #[must_use]
    pub fn from_students(students: &[Student]) -> Self {
        let total_books = students.iter().map(|s| s.books().len()).sum();
        let completed_books = students.iter().map(total_books_completed).sum();
        let average = if students.is_empty() {
            0
        } else {
            let sum: u32 = students.iter().map(|s| u32::from(average_progress(s))).sum();
            #[allow(
                clippy::cast_precision_loss,
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss
            )]
            let mean = (f64::from(sum) / students.len() as f64).round() as u8;
            mean
        };

        Self {
            students: students.len(),
            total_books,
            completed_books,
            average_progress: average,
        }
    }
}

/// How the class is doing overall, selected by completion and engagement
/// thresholds. The narrative wording per tier is a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassTier {
    Excelling,
    SolidProgress,
    HighEngagement,
    Foundation,
    GettingStarted,
}

/// Selects the class tier.
///
/// Completion rate is `total completed / (students * TARGET_BOOKS_PER_STUDENT)`;
/// active rate is the share of students with at least one book in progress.
/// An empty roster is `GettingStarted`.
#[must_use]
pub fn class_tier(students: &[Student]) -> ClassTier {
    if students.is_empty() {
        return ClassTier::GettingStarted;
    }

    let total_completed: u32 = students.iter().map(total_books_completed).sum();
    let actively_reading = students
        .iter()
        .filter(|s| s.books().iter().any(|b| b.status() == ReadingStatus::Reading))
        .count();

    #[allow(clippy::cast_precision_loss)]
    let student_count = students.len() as f64;
    let completion_rate =
        f64::from(total_completed) / (student_count * f64::from(TARGET_BOOKS_PER_STUDENT));
    #[allow(clippy::cast_precision_loss)]
    let active_rate = actively_reading as f64 / student_count;

    if completion_rate >= 0.8 && active_rate >= 0.7 {
        ClassTier::Excelling
    } else if completion_rate >= 0.6 && active_rate >= 0.5 {
        ClassTier::SolidProgress
    } else if active_rate >= 0.6 {
        ClassTier::HighEngagement
    } else if total_completed >= 20 {
        ClassTier::Foundation
    } else {
        ClassTier::GettingStarted
    }
}

/// Pages read on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyPages {
    pub day: NaiveDate,
    pub pages: u32,
}

/// Pages read per day over the trailing window of `days` days ending at
/// `today`, oldest day first. Sessions outside the window are ignored.
///
/// Derived from real session records; the window end is injected so callers
/// control "today" (see `Clock`).
#[must_use]
pub fn daily_pages(sessions: &[ReadingSession], today: NaiveDate, days: u32) -> Vec<DailyPages> {
    let mut buckets: Vec<DailyPages> = (0..days)
        .rev()
        .map(|back| DailyPages {
            day: today - Duration::days(i64::from(back)),
            pages: 0,
        })
        .collect();

    for session in sessions {
        let day = session.date().date_naive();
        if let Some(bucket) = buckets.iter_mut().find(|b| b.day == day) {
            bucket.pages += session.pages_read();
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Book, BookId, SessionId, StudentBookId, StudentId};
    use crate::time::fixed_now;
    use chrono::{DateTime, TimeZone, Utc};
    use uuid::Uuid;

    fn book(n: u128) -> Book {
        Book::new(
            BookId::new(Uuid::from_u128(n)),
            format!("Book {n}"),
            "Author",
            "",
            None,
        )
        .unwrap()
    }

    fn assignment(
        n: u128,
        status: ReadingStatus,
        progress: u8,
        last_read: Option<DateTime<Utc>>,
        sessions: Vec<ReadingSession>,
    ) -> StudentBook {
        StudentBook::new(
            StudentBookId::new(Uuid::from_u128(n)),
            book(n),
            status,
            progress,
            last_read,
            fixed_now(),
            sessions,
        )
        .unwrap()
    }

    fn student(name: &str, books: Vec<StudentBook>) -> Student {
        Student::new(StudentId::new(Uuid::from_u128(99)), name, None, books).unwrap()
    }

    fn session(n: u128, date: DateTime<Utc>, pages: u32, minutes: u32) -> ReadingSession {
        ReadingSession::new(SessionId::new(Uuid::from_u128(n)), date, pages, minutes, None)
    }

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn zero_books_means_zero_stats() {
        let s = student("Empty", vec![]);
        assert_eq!(average_progress(&s), 0);
        assert_eq!(total_books_completed(&s), 0);
        assert!(currently_reading(&s).is_none());
    }

    #[test]
    fn completed_count_is_exact() {
        let s = student(
            "Emma Watson",
            vec![
                assignment(1, ReadingStatus::Reading, 65, None, vec![]),
                assignment(2, ReadingStatus::Completed, 100, None, vec![]),
                assignment(3, ReadingStatus::Paused, 30, None, vec![]),
            ],
        );
        assert_eq!(total_books_completed(&s), 1);
    }

    #[test]
    fn emma_watson_scenario() {
        let s = student(
            "Emma Watson",
            vec![
                assignment(1, ReadingStatus::Reading, 65, None, vec![]),
                assignment(2, ReadingStatus::Completed, 100, None, vec![]),
            ],
        );
        assert_eq!(average_progress(&s), 83);
        assert_eq!(total_books_completed(&s), 1);
    }

    #[test]
    fn average_progress_is_order_invariant() {
        let a = assignment(1, ReadingStatus::Reading, 65, None, vec![]);
        let b = assignment(2, ReadingStatus::Completed, 100, None, vec![]);
        let c = assignment(3, ReadingStatus::Paused, 10, None, vec![]);

        let forward = student("S", vec![a.clone(), b.clone(), c.clone()]);
        let backward = student("S", vec![c, b, a]);
        assert_eq!(average_progress(&forward), average_progress(&backward));
    }

    #[test]
    fn currently_reading_none_without_reading_books() {
        let s = student(
            "S",
            vec![
                assignment(1, ReadingStatus::Completed, 100, Some(fixed_now()), vec![]),
                assignment(2, ReadingStatus::Paused, 40, Some(fixed_now()), vec![]),
            ],
        );
        assert!(currently_reading(&s).is_none());
    }

    #[test]
    fn currently_reading_picks_latest_date() {
        let s = student(
            "S",
            vec![
                assignment(1, ReadingStatus::Reading, 30, Some(date(2024, 6, 10)), vec![]),
                assignment(2, ReadingStatus::Reading, 65, Some(date(2024, 6, 14)), vec![]),
            ],
        );
        let current = currently_reading(&s).unwrap();
        assert_eq!(current.last_read_date(), Some(date(2024, 6, 14)));
    }

    #[test]
    fn currently_reading_missing_date_sorts_earliest() {
        let s = student(
            "S",
            vec![
                assignment(1, ReadingStatus::Reading, 30, None, vec![]),
                assignment(2, ReadingStatus::Reading, 65, Some(date(2024, 6, 10)), vec![]),
            ],
        );
        let current = currently_reading(&s).unwrap();
        assert_eq!(current.progress(), 65);
    }

    #[test]
    fn currently_reading_tie_keeps_first_encountered() {
        let tie = Some(date(2024, 6, 14));
        let s = student(
            "S",
            vec![
                assignment(1, ReadingStatus::Reading, 30, tie, vec![]),
                assignment(2, ReadingStatus::Reading, 65, tie, vec![]),
            ],
        );
        let current = currently_reading(&s).unwrap();
        assert_eq!(current.progress(), 30);
    }

    #[test]
    fn session_totals_match_the_contract() {
        let b = assignment(
            1,
            ReadingStatus::Reading,
            65,
            None,
            vec![
                session(1, date(2024, 6, 14), 25, 45),
                session(2, date(2024, 6, 12), 30, 60),
            ],
        );
        let totals = session_totals(&b);
        assert_eq!(totals.total_pages, 55);
        assert_eq!(totals.total_minutes, 105);
        assert_eq!(totals.count, 2);
        assert!((totals.avg_minutes - 52.5).abs() < f64::EPSILON);
    }

    #[test]
    fn session_totals_empty_book() {
        let b = assignment(1, ReadingStatus::YetToStart, 0, None, vec![]);
        let totals = session_totals(&b);
        assert_eq!(totals.count, 0);
        assert!((totals.avg_minutes - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn class_overview_empty_roster() {
        let overview = ClassOverview::from_students(&[]);
        assert_eq!(overview.students, 0);
        assert_eq!(overview.total_books, 0);
        assert_eq!(overview.completed_books, 0);
        assert_eq!(overview.average_progress, 0);
    }

    #[test]
    fn class_overview_sums_roster() {
        let roster = vec![
            student(
                "A",
                vec![
                    assignment(1, ReadingStatus::Completed, 100, None, vec![]),
                    assignment(2, ReadingStatus::Reading, 50, None, vec![]),
                ],
            ),
            student("B", vec![assignment(3, ReadingStatus::Reading, 25, None, vec![])]),
        ];
        let overview = ClassOverview::from_students(&roster);
        assert_eq!(overview.students, 2);
        assert_eq!(overview.total_books, 3);
        assert_eq!(overview.completed_books, 1);
        // round(mean(75, 25)) = 50
        assert_eq!(overview.average_progress, 50);
    }

    fn roster_with(completed_per_student: u8, reading_students: usize, total: usize) -> Vec<Student> {
        (0..total)
            .map(|i| {
                let mut books = Vec::new();
                for c in 0..completed_per_student {
                    books.push(assignment(
                        u128::try_from(i).unwrap() * 10 + u128::from(c) + 1,
                        ReadingStatus::Completed,
                        100,
                        None,
                        vec![],
                    ));
                }
                if i < reading_students {
                    books.push(assignment(
                        u128::try_from(i).unwrap() * 10 + 9,
                        ReadingStatus::Reading,
                        50,
                        None,
                        vec![],
                    ));
                }
                student(&format!("Student {i}"), books)
            })
            .collect()
    }

    #[test]
    fn class_tier_empty_roster_is_getting_started() {
        assert_eq!(class_tier(&[]), ClassTier::GettingStarted);
    }

    #[test]
    fn class_tier_excelling() {
        // 10 students, 4 completed each => rate 0.8; 7 of 10 reading => 0.7
        let roster = roster_with(4, 7, 10);
        assert_eq!(class_tier(&roster), ClassTier::Excelling);
    }

    #[test]
    fn class_tier_solid_progress() {
        // rate 0.6, active 0.5
        let roster = roster_with(3, 5, 10);
        assert_eq!(class_tier(&roster), ClassTier::SolidProgress);
    }

    #[test]
    fn class_tier_high_engagement() {
        // little completed, 6 of 10 reading
        let roster = roster_with(0, 6, 10);
        assert_eq!(class_tier(&roster), ClassTier::HighEngagement);
    }

    #[test]
    fn class_tier_foundation() {
        // 20 completed overall, nobody actively reading
        let roster = roster_with(2, 0, 10);
        assert_eq!(class_tier(&roster), ClassTier::Foundation);
    }

    #[test]
    fn class_tier_getting_started() {
        let roster = roster_with(1, 0, 10);
        assert_eq!(class_tier(&roster), ClassTier::GettingStarted);
    }

    #[test]
    fn daily_pages_buckets_by_day() {
        let today = date(2024, 6, 14).date_naive();
        let sessions = vec![
            session(1, date(2024, 6, 14), 25, 45),
            session(2, date(2024, 6, 12), 30, 60),
            session(3, date(2024, 6, 12), 5, 10),
            // outside the window
            session(4, date(2024, 5, 1), 99, 99),
        ];
        let days = daily_pages(&sessions, today, 7);

        assert_eq!(days.len(), 7);
        assert_eq!(days[0].day, date(2024, 6, 8).date_naive());
        assert_eq!(days[6].day, today);
        assert_eq!(days[6].pages, 25);
        assert_eq!(days[4].pages, 35);
        assert_eq!(days[0].pages, 0);
    }
}
