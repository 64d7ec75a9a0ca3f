//! Loading components

use dioxus::prelude::*;

/// Inline loading indicator with an optional caption
#[component]
pub fn LoadingDots(#[props(default, into)] label: String) -> Element {
    rsx! {
        div {
            class: "loading-dots",
            span { class: "loading-dots__dot" }
            span { class: "loading-dots__dot", style: "animation-delay: 0.1s" }
            span { class: "loading-dots__dot", style: "animation-delay: 0.2s" }
            if !label.is_empty() {
                span { class: "loading-dots__label", "{label}" }
            }
        }
    }
}
