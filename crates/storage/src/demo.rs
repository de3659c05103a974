//! Sample roster for running the dashboard without a backend.
//!
//! Seeds the in-memory store with a small class so every screen has
//! something to show. Dates are relative to now so the recent-activity
//! strip is populated.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use bookworm_core::model::{
    AccountId, BookId, ReadingStatus, SessionId, StudentBookId, StudentId,
};

use crate::repository::{
    BookRecord, InMemoryRepository, SessionRecord, StudentBookRecord, StudentRecord,
};

/// Account that owns the demo roster.
#[must_use]
pub fn demo_account() -> AccountId {
    AccountId::new(Uuid::from_u128(0x11da_b289_5ba7_4605_ae10_3fff_f1bb_770c))
}

struct BookSeed {
    title: &'static str,
    author: &'static str,
    pages: u32,
    status: ReadingStatus,
    progress: u8,
    last_read_days_ago: Option<i64>,
    /// (days ago, pages, minutes, notes)
    sessions: &'static [(i64, u32, u32, Option<&'static str>)],
}

struct StudentSeed {
    name: &'static str,
    books: &'static [BookSeed],
}

const ROSTER: &[StudentSeed] = &[
    StudentSeed {
        name: "Emma Watson",
        books: &[
            BookSeed {
                title: "To Kill a Mockingbird",
                author: "Harper Lee",
                pages: 376,
                status: ReadingStatus::Reading,
                progress: 65,
                last_read_days_ago: Some(1),
                sessions: &[
                    (1, 25, 45, Some("Great progress today!")),
                    (3, 30, 60, None),
                    (6, 18, 35, None),
                ],
            },
            BookSeed {
                title: "The Great Gatsby",
                author: "F. Scott Fitzgerald",
                pages: 180,
                status: ReadingStatus::Completed,
                progress: 100,
                last_read_days_ago: Some(5),
                sessions: &[(5, 40, 70, Some("Finished!")), (9, 35, 55, None)],
            },
        ],
    },
    StudentSeed {
        name: "John Smith",
        books: &[
            BookSeed {
                title: "1984",
                author: "George Orwell",
                pages: 328,
                status: ReadingStatus::Reading,
                progress: 45,
                last_read_days_ago: Some(2),
                sessions: &[(2, 20, 40, None), (4, 15, 30, Some("Slow chapter"))],
            },
            BookSeed {
                title: "The Great Gatsby",
                author: "F. Scott Fitzgerald",
                pages: 180,
                status: ReadingStatus::Paused,
                progress: 30,
                last_read_days_ago: Some(14),
                sessions: &[],
            },
        ],
    },
    StudentSeed {
        name: "Sofia Martinez",
        books: &[BookSeed {
            title: "To Kill a Mockingbird",
            author: "Harper Lee",
            pages: 376,
            status: ReadingStatus::YetToStart,
            progress: 0,
            last_read_days_ago: None,
            sessions: &[],
        }],
    },
];

/// Seed the store with the sample class under [`demo_account`].
pub fn seed_sample_roster(repo: &InMemoryRepository) {
    let now = Utc::now();
    for student in ROSTER {
        seed_student(repo, now, student);
    }
}

fn seed_student(repo: &InMemoryRepository, now: DateTime<Utc>, seed: &StudentSeed) {
    let student_id = StudentId::new(Uuid::new_v4());
    repo.seed_student(
        demo_account(),
        StudentRecord {
            id: student_id,
            name: seed.name.to_owned(),
            avatar: None,
        },
    );

    for book in seed.books {
        let assignment_id = StudentBookId::new(Uuid::new_v4());
        repo.seed_book(StudentBookRecord {
            id: assignment_id,
            student_id,
            book: BookRecord {
                id: BookId::new(Uuid::new_v4()),
                title: book.title.to_owned(),
                author: book.author.to_owned(),
                cover: String::new(),
                total_pages: Some(book.pages),
            },
            status: book.status,
            progress: book.progress,
            last_read_date: book.last_read_days_ago.map(|d| now - Duration::days(d)),
            assigned_date: now - Duration::days(30),
        });

        for (days_ago, pages, minutes, notes) in book.sessions {
            repo.seed_session(SessionRecord {
                id: SessionId::new(Uuid::new_v4()),
                student_book_id: assignment_id,
                date: now - Duration::days(*days_ago),
                pages_read: *pages,
                time_spent_mins: *minutes,
                notes: notes.map(str::to_owned),
            });
        }
    }
}
