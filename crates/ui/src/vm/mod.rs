mod book_vm;
mod class_vm;
mod status_vm;
mod student_vm;
mod time_fmt;

pub use book_vm::{BookDetailVm, BookRowVm, DayActivityVm, SessionVm, map_book_rows};
pub use class_vm::{ClassOverviewVm, tier_narrative};
pub use status_vm::{status_class, status_label};
pub use student_vm::{CurrentBookVm, StudentCardVm, initials, map_student_cards};
pub use time_fmt::{day_label, format_date};
