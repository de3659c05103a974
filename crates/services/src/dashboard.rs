//! Navigation and display state for the dashboard.
//!
//! Modeled as an immutable value with pure transitions: every event method
//! consumes the state and returns the successor. Invalid events (selecting a
//! book from the overview, searching from a detail screen) return the state
//! unchanged. Nothing here is persisted; the state dies with the process.

use bookworm_core::model::{Student, StudentBookId, StudentId};

/// Which screen is on display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Overview,
    StudentDetail(StudentId),
    BookDetail {
        student: StudentId,
        book: StudentBookId,
    },
}

/// Grid or list rendering of the overview roster. Orthogonal to navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardState {
    screen: Screen,
    view_mode: ViewMode,
    search: String,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    /// Initial state: overview, grid, no filter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen: Screen::Overview,
            view_mode: ViewMode::default(),
            search: String::new(),
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Overview → student detail. A no-op from any other screen.
    #[must_use]
    pub fn select_student(self, student: StudentId) -> Self {
        match self.screen {
            Screen::Overview => Self {
                screen: Screen::StudentDetail(student),
                ..self
            },
            _ => self,
        }
    }

    /// Student detail → book detail. A no-op unless a student is selected.
    #[must_use]
    pub fn select_book(self, book: StudentBookId) -> Self {
        match self.screen {
            Screen::StudentDetail(student) => Self {
                screen: Screen::BookDetail { student, book },
                ..self
            },
            _ => self,
        }
    }

    /// Pop one navigation level; a no-op on the overview.
    #[must_use]
    pub fn back(self) -> Self {
        let screen = match self.screen {
            Screen::BookDetail { student, .. } => Screen::StudentDetail(student),
            Screen::StudentDetail(_) | Screen::Overview => Screen::Overview,
        };
        Self { screen, ..self }
    }

    /// Switch grid/list rendering. Never changes the screen.
    #[must_use]
    pub fn set_view_mode(self, mode: ViewMode) -> Self {
        Self {
            view_mode: mode,
            ..self
        }
    }

    /// Update the overview search filter. A no-op on detail screens.
    #[must_use]
    pub fn set_search_filter(self, text: impl Into<String>) -> Self {
        match self.screen {
            Screen::Overview => Self {
                search: text.into(),
                ..self
            },
            _ => self,
        }
    }
}

/// Case-insensitive substring filter on student names. An empty or
/// whitespace-only filter matches everyone.
#[must_use]
pub fn filter_students<'a>(students: &'a [Student], filter: &str) -> Vec<&'a Student> {
    let needle = filter.trim().to_lowercase();
    students
        .iter()
        .filter(|s| needle.is_empty() || s.name().to_lowercase().contains(&needle))
        .collect()
}
