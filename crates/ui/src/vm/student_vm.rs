use bookworm_core::model::StudentId;
use services::{CurrentBookItem, StudentOverviewItem};

use crate::vm::time_fmt::format_date;

/// Currently-reading slice of a student card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentBookVm {
    pub title: String,
    pub progress: u8,
    pub last_read_str: Option<String>,
}

impl From<&CurrentBookItem> for CurrentBookVm {
    fn from(item: &CurrentBookItem) -> Self {
        Self {
            title: item.title.clone(),
            progress: item.progress,
            last_read_str: item.last_read_date.map(format_date),
        }
    }
}

/// UI-ready student row for both the grid and the list rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentCardVm {
    pub id: StudentId,
    pub name: String,
    pub initials: String,
    pub book_count: usize,
    pub completed: u32,
    pub active: u32,
    pub average_progress: u8,
    pub current: Option<CurrentBookVm>,
}

impl From<&StudentOverviewItem> for StudentCardVm {
    fn from(item: &StudentOverviewItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            initials: initials(&item.name),
            book_count: item.book_count,
            completed: item.completed,
            active: item.active,
            average_progress: item.average_progress,
            current: item.currently_reading.as_ref().map(CurrentBookVm::from),
        }
    }
}

/// Convert overview items into card view models.
#[must_use]
pub fn map_student_cards(items: &[StudentOverviewItem]) -> Vec<StudentCardVm> {
    items.iter().map(StudentCardVm::from).collect()
}

/// Uppercase first letters of each name part, for the avatar circle.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
