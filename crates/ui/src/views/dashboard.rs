use dioxus::prelude::*;

use bookworm_core::model::Student;
use services::{DashboardState, Screen};

use crate::context::AppContext;
use crate::views::state::{ViewError, ViewState, view_state_from_resource};

use super::book_detail::BookDetailScreen;
use super::overview::OverviewScreen;
use super::student_detail::StudentDetailScreen;

/// Root of the dashboard: loads the roster snapshot once, then renders the
/// screen selected by the navigation state machine.
#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let roster = ctx.roster();

    let resource = use_resource(move || {
        let roster = roster.clone();
        async move {
            roster
                .load_roster()
                .await
                .map_err(|_| ViewError::Unavailable)
        }
    });

    let state = use_signal(DashboardState::new);
    let view = view_state_from_resource(&resource);

    rsx! {
        div { class: "dashboard",
            match view {
                ViewState::Idle => rsx! {
                    p { class: "hint", "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "hint", "Loading students..." }
                },
                ViewState::Ready(students) => rsx! {
                    ScreenSwitch { students, state }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn ScreenSwitch(students: Vec<Student>, state: Signal<DashboardState>) -> Element {
    match state().screen() {
        Screen::Overview => rsx! {
            OverviewScreen { students, state }
        },
        Screen::StudentDetail(id) => match students.iter().find(|s| s.id() == id) {
            Some(student) => rsx! {
                StudentDetailScreen { student: student.clone(), state }
            },
            None => rsx! {
                MissingSelection { state }
            },
        },
        Screen::BookDetail { student, book } => {
            let found = students
                .iter()
                .find(|s| s.id() == student)
                .and_then(|s| s.books().iter().find(|b| b.id() == book).map(|b| (s, b)));
            match found {
                Some((owner, assignment)) => rsx! {
                    BookDetailScreen {
                        student_name: owner.name().to_owned(),
                        book: assignment.clone(),
                        state,
                    }
                },
                None => rsx! {
                    MissingSelection { state }
                },
            }
        }
    }
}

#[component]
fn MissingSelection(state: Signal<DashboardState>) -> Element {
    rsx! {
        div { class: "empty",
            p { "That record is no longer in the roster." }
            button {
                class: "back-button",
                onclick: move |_| state.set(DashboardState::new()),
                "Back to students"
            }
        }
    }
}
