//! Inline error banner

use dioxus::prelude::*;
use post_form::ErrorNotice;

/// Props for ErrorBanner
#[derive(Props, Clone, PartialEq)]
pub struct ErrorBannerProps {
    pub notice: ErrorNotice,
    pub on_retry: EventHandler<()>,
    pub on_dismiss: EventHandler<()>,
}

/// Non-blocking error shown above the form; the form stays usable underneath.
#[component]
pub fn ErrorBanner(props: ErrorBannerProps) -> Element {
    let notice = &props.notice;

    rsx! {
        div {
            class: "error-banner",
            role: "alert",
            p { class: "error-banner__message", "{notice.message}" }
            div {
                class: "error-banner__actions",
                if notice.is_retryable() {
                    button {
                        r#type: "button",
                        class: "error-banner__retry",
                        onclick: move |_| props.on_retry.call(()),
                        "Retry"
                    }
                }
                button {
                    r#type: "button",
                    class: "error-banner__dismiss",
                    onclick: move |_| props.on_dismiss.call(()),
                    "Dismiss"
                }
            }
        }
    }
}
