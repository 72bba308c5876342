use dioxus::prelude::*;

mod components;
mod notifier;
mod views;

use components::NotificationSnackbar;
use notifier::use_notifier;
use views::Notes;

// We can import assets in dioxus with the `asset!` macro. This macro takes a path to an asset relative to the crate root.
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Root component. Owns the notification channel and hands it to everything that reports
/// outcomes or renders them.
#[component]
fn App() -> Element {
    let notifier = use_notifier();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Notes { notifier }
        NotificationSnackbar { notifier }
    }
}
