use crate::notifier::Notifier;
use dioxus::prelude::*;
use notes_core::{NotificationSink, Severity};

/// Bottom-center snackbar showing the current notification, if any
#[component]
pub fn NotificationSnackbar(notifier: Notifier) -> Element {
    let Some(notification) = notifier.current() else {
        return rsx! {};
    };

    let severity_class = match notification.severity() {
        Severity::Success => "snackbar-success",
        Severity::Error => "snackbar-error",
        Severity::Info => "snackbar-info",
        Severity::Warning => "snackbar-warning",
    };
    let message = notification.message().to_string();
    let mut notifier = notifier;

    rsx! {
        div { class: "snackbar {severity_class}", role: "alert",
            if notification.is_loading() {
                span { class: "spinner" }
            }
            span { class: "snackbar-message", "{message}" }
            button {
                class: "snackbar-close",
                r#type: "button",
                onclick: move |_| notifier.close(),
                "×"
            }
        }
    }
}
