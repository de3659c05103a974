use dioxus::prelude::*;

use crate::views::DashboardView;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title; screen headings live in the views.
        document::Title { "Bookworm" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Layout {}
            }
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        header { class: "topbar",
            div { class: "topbar-brand",
                span { class: "topbar-logo", "📖" }
                h1 { "Bookworm" }
            }
            p { class: "topbar-subtitle", "Teacher's Dashboard" }
        }
        main { class: "content",
            DashboardView {}
        }
    }
}
