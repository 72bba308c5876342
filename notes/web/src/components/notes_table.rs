use super::EmptyNotesState;
use dioxus::prelude::*;
use notes_core::Note;

/// Table of every note, in the order the server returned them
#[component]
pub fn NotesTable(notes: Vec<Note>, on_edit: EventHandler<Note>, on_delete: EventHandler<u32>) -> Element {
    rsx! {
        div { class: "table-container",
            table { class: "notes-table",
                thead {
                    tr {
                        th { "#" }
                        th { "Title" }
                        th { "Description" }
                        th { "Status" }
                        th { "Created" }
                        th { class: "align-right", "Actions" }
                    }
                }
                tbody {
                    if notes.is_empty() {
                        EmptyNotesState {}
                    }
                    for (index, note) in notes.iter().enumerate() {
                        NoteRow {
                            key: "{note.id}",
                            position: index + 1,
                            note: note.clone(),
                            on_edit: on_edit,
                            on_delete: on_delete,
                        }
                    }
                }
            }
        }
    }
}

/// A single note with its edit and delete actions
#[component]
fn NoteRow(position: usize, note: Note, on_edit: EventHandler<Note>, on_delete: EventHandler<u32>) -> Element {
    let id = note.id;
    let editable = note.clone();

    rsx! {
        tr { class: "note-row",
            td { "{position}" }
            td { "{note.title}" }
            td { "{note.description}" }
            td { "{note.status}" }
            td { "{note.created}" }
            td { class: "align-right",
                button {
                    class: "icon-button",
                    r#type: "button",
                    title: "Edit",
                    onclick: move |_| on_edit.call(editable.clone()),
                    "✎"
                }
                button {
                    class: "icon-button",
                    r#type: "button",
                    title: "Delete",
                    onclick: move |_| on_delete.call(id),
                    "🗑"
                }
            }
        }
    }
}
