use dioxus::prelude::*;

/// Placeholder row shown while there is nothing in the list
#[component]
pub fn EmptyNotesState() -> Element {
    rsx! {
        tr {
            td { class: "empty-state", colspan: "6", "No notes yet. Create one to get started!" }
        }
    }
}
