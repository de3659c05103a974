use dioxus::prelude::*;

use bookworm_core::model::Student;
use services::{
    ClassSummaryItem, DashboardState, StudentOverviewItem, ViewMode, filter_students,
};

use crate::vm::{ClassOverviewVm, StudentCardVm, map_student_cards};

use super::widgets::{ProgressBar, StatTile};

#[component]
pub(crate) fn OverviewScreen(students: Vec<Student>, state: Signal<DashboardState>) -> Element {
    let summary = ClassOverviewVm::from(&ClassSummaryItem::from_students(&students));

    let search = state().search().to_owned();
    let visible: Vec<StudentOverviewItem> = filter_students(&students, &search)
        .into_iter()
        .map(StudentOverviewItem::from_student)
        .collect();
    let cards = map_student_cards(&visible);
    let shown = cards.len();

    let mode = state().view_mode();

    rsx! {
        div { class: "overview",
            div { class: "overview-head",
                div {
                    h2 { "Reading Progress Dashboard" }
                    p { class: "muted", "Track your students' reading journey" }
                }
                input {
                    class: "search",
                    placeholder: "Search students...",
                    value: "{search}",
                    oninput: move |evt| state.set(state().set_search_filter(evt.value())),
                }
            }

            section { class: "stat-tiles",
                StatTile { label: "Students", value: summary.students.to_string() }
                StatTile { label: "Completed", value: summary.completed_books.to_string() }
                StatTile { label: "Total Books", value: summary.total_books.to_string() }
                StatTile { label: "Avg Progress", value: format!("{}%", summary.average_progress) }
            }

            p { class: "class-summary", "{summary.summary}" }

            div { class: "toolbar",
                h3 { "Students ({shown})" }
                div { class: "mode-toggle",
                    button {
                        class: if mode == ViewMode::Grid { "toggle active" } else { "toggle" },
                        onclick: move |_| state.set(state().set_view_mode(ViewMode::Grid)),
                        "Grid"
                    }
                    button {
                        class: if mode == ViewMode::List { "toggle active" } else { "toggle" },
                        onclick: move |_| state.set(state().set_view_mode(ViewMode::List)),
                        "List"
                    }
                }
            }

            if students.is_empty() {
                p { class: "empty", "No students yet." }
            } else if cards.is_empty() {
                p { class: "empty", "No students match your search." }
            } else if mode == ViewMode::Grid {
                div { class: "student-grid",
                    for card in cards {
                        StudentCard { card, state }
                    }
                }
            } else {
                ul { class: "student-list",
                    for card in cards {
                        StudentRow { card, state }
                    }
                }
            }
        }
    }
}

#[component]
fn StudentCard(card: StudentCardVm, state: Signal<DashboardState>) -> Element {
    let id = card.id;
    rsx! {
        div {
            class: "student-card",
            onclick: move |_| state.set(state().select_student(id)),
            div { class: "card-head",
                span { class: "avatar", "{card.initials}" }
                div {
                    h4 { "{card.name}" }
                    p { class: "muted small", "{card.book_count} books assigned" }
                }
            }
            match &card.current {
                Some(current) => rsx! {
                    div { class: "current-book",
                        div { class: "row-between",
                            span { "Currently Reading" }
                            span { class: "strong", "{current.progress}%" }
                        }
                        ProgressBar { value: current.progress }
                        match &current.last_read_str {
                            Some(last) => rsx! {
                                p { class: "muted small", "Last read: {last}" }
                            },
                            None => rsx! {},
                        }
                    }
                },
                None => rsx! {
                    p { class: "muted card-empty", "No books currently being read" }
                },
            }
            div { class: "row-between",
                span { class: "small", "{card.completed} completed" }
                span { class: "badge badge-muted", "{card.active} reading" }
            }
        }
    }
}

#[component]
fn StudentRow(card: StudentCardVm, state: Signal<DashboardState>) -> Element {
    let id = card.id;
    rsx! {
        li {
            class: "student-row",
            onclick: move |_| state.set(state().select_student(id)),
            span { class: "avatar avatar-sm", "{card.initials}" }
            div { class: "row-name",
                span { class: "strong", "{card.name}" }
                span { class: "muted small", "{card.book_count} books" }
            }
            div { class: "row-current",
                match &card.current {
                    Some(current) => rsx! {
                        span { "{current.title}" }
                        ProgressBar { value: current.progress }
                    },
                    None => rsx! {
                        span { class: "muted", "No active book" }
                    },
                }
            }
            span { class: "row-completed", "{card.completed} completed" }
            span { class: "badge badge-muted", "{card.active}" }
        }
    }
}
