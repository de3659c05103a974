use dioxus::prelude::*;

use bookworm_core::model::Student;
use services::{DashboardState, StudentOverviewItem};

use crate::vm::{BookRowVm, StudentCardVm, map_book_rows};

use super::widgets::ProgressBar;

#[component]
pub(crate) fn StudentDetailScreen(student: Student, state: Signal<DashboardState>) -> Element {
    let card = StudentCardVm::from(&StudentOverviewItem::from_student(&student));
    let rows = map_book_rows(student.books());

    rsx! {
        div { class: "student-detail",
            button {
                class: "back-button",
                onclick: move |_| state.set(state().back()),
                "Back to Students"
            }

            header { class: "detail-head",
                span { class: "avatar avatar-lg", "{card.initials}" }
                div {
                    h2 { "{card.name}" }
                    p { class: "muted",
                        "{card.completed} books completed • {card.book_count} total assigned"
                    }
                }
            }

            section { class: "detail-stats",
                div { class: "stat-tile",
                    p { class: "stat-value", "{card.completed}" }
                    p { class: "stat-label", "Completed" }
                }
                div { class: "stat-tile",
                    p { class: "stat-value", "{card.average_progress}%" }
                    p { class: "stat-label", "Avg Progress" }
                }
                div { class: "stat-tile",
                    p { class: "stat-value", "{card.active}" }
                    p { class: "stat-label", "Currently Reading" }
                }
            }

            h3 { "Assigned Books" }
            if rows.is_empty() {
                p { class: "empty", "No books assigned yet." }
            } else {
                div { class: "book-list",
                    for row in rows {
                        BookRow { row, state }
                    }
                }
            }
        }
    }
}

#[component]
fn BookRow(row: BookRowVm, state: Signal<DashboardState>) -> Element {
    let id = row.id;
    rsx! {
        div {
            class: "book-row",
            onclick: move |_| state.set(state().select_book(id)),
            div { class: "row-between",
                div {
                    h4 { "{row.title}" }
                    p { class: "muted small", "{row.author}" }
                }
                span { class: "{row.status_class}", "{row.status_label}" }
            }
            div { class: "row-between small",
                span { "Progress" }
                span { class: "strong", "{row.progress}%" }
            }
            ProgressBar { value: row.progress }
            div { class: "book-row-dates muted small",
                span { "Assigned: {row.assigned_str}" }
                match &row.last_read_str {
                    Some(last) => rsx! {
                        span { "Last read: {last}" }
                    },
                    None => rsx! {},
                }
            }
        }
    }
}
