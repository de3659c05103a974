use dioxus::prelude::*;

#[component]
pub(crate) fn ProgressBar(value: u8) -> Element {
    rsx! {
        div { class: "progress-track",
            div { class: "progress-fill", style: "width: {value}%;" }
        }
    }
}

#[component]
pub(crate) fn StatTile(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "stat-tile",
            p { class: "stat-value", "{value}" }
            p { class: "stat-label", "{label}" }
        }
    }
}
