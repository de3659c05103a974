mod book_detail;
mod dashboard;
mod overview;
mod state;
mod student_detail;
mod widgets;

pub use dashboard::DashboardView;
pub use state::{ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
