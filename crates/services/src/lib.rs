#![forbid(unsafe_code)]

pub mod dashboard;
pub mod error;
pub mod roster;

pub use bookworm_core::Clock;

pub use dashboard::{DashboardState, Screen, ViewMode, filter_students};
pub use error::RosterError;
pub use roster::{
    BookStatsItem, ClassSummaryItem, CurrentBookItem, RosterService, StudentOverviewItem,
    map_student_overview,
};
