use dioxus::prelude::*;

use bookworm_core::model::StudentBook;
use services::{BookStatsItem, DashboardState};

use crate::context::AppContext;
use crate::vm::BookDetailVm;

use super::widgets::{ProgressBar, StatTile};

#[component]
pub(crate) fn BookDetailScreen(
    student_name: String,
    book: StudentBook,
    state: Signal<DashboardState>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let today = ctx.roster().today();
    let stats = BookStatsItem::from_book(&book, today);
    let vm = BookDetailVm::from_book(&book, &stats);

    rsx! {
        div { class: "book-detail",
            button {
                class: "back-button",
                onclick: move |_| state.set(state().back()),
                "Back to {student_name}"
            }

            header { class: "detail-head",
                div {
                    h2 { "{vm.title}" }
                    p { class: "muted", "by {vm.author}" }
                    p { class: "muted small", "Reading progress for {student_name}" }
                    span { class: "{vm.status_class}", "{vm.status_label}" }
                }
                div { class: "detail-progress",
                    div { class: "row-between",
                        span { "Progress" }
                        span { class: "strong", "{vm.progress}%" }
                    }
                    ProgressBar { value: vm.progress }
                }
            }

            section { class: "stat-tiles",
                StatTile { label: "Total Time", value: format!("{}h", vm.total_hours) }
                StatTile { label: "Pages Read", value: vm.total_pages.to_string() }
                StatTile { label: "Sessions", value: vm.session_count.to_string() }
                StatTile { label: "Avg Minutes", value: vm.avg_minutes.to_string() }
            }

            section { class: "activity",
                h3 { "Last 7 Days" }
                div { class: "activity-strip",
                    for day in vm.activity {
                        div { class: "activity-day",
                            span { class: "activity-pages", "{day.pages}" }
                            span { class: "activity-label muted small", "{day.label}" }
                        }
                    }
                }
            }

            section { class: "sessions",
                h3 { "Reading Sessions" }
                if vm.sessions.is_empty() {
                    p { class: "empty", "No reading sessions recorded yet" }
                } else {
                    div { class: "session-list",
                        for session in vm.sessions {
                            div { class: "session-card",
                                div { class: "row-between",
                                    span { class: "strong", "{session.date_str}" }
                                    span { class: "muted small", "{session.minutes} minutes" }
                                }
                                p { class: "muted small", "{session.pages} pages read" }
                                match &session.notes {
                                    Some(notes) => rsx! {
                                        div { class: "session-notes",
                                            p { class: "muted small", "Notes:" }
                                            p { "{notes}" }
                                        }
                                    },
                                    None => rsx! {},
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
