use crate::components::{NoteDialog, NotesTable};
use crate::notifier::Notifier;
use dioxus::prelude::*;
use notes_client::{HttpNotesApi, NoteSync, DEFAULT_BASE_URL};
use notes_core::{Note, SaveRequest};

/// The notes page: a "New Note" button, the table of notes and the note dialog.
///
/// Loads the list on mount. Every save or delete goes through [`NoteSync`], which reloads the
/// whole list afterwards; the list shown here is only ever replaced by such a reload.
#[component]
pub fn Notes(notifier: Notifier) -> Element {
    let sync = use_hook(|| NoteSync::new(HttpNotesApi::new(DEFAULT_BASE_URL)));
    let mut notes = use_signal(Vec::<Note>::new);
    let mut selected = use_signal(|| None::<Note>);
    let mut dialog_open = use_signal(|| false);

    let load_sync = sync.clone();
    use_effect(move || {
        let sync = load_sync.clone();
        let mut notifier = notifier;
        spawn(async move {
            tracing::debug!("Loading notes from {}", sync.api().base_url());
            if let Some(loaded) = sync.fetch(&mut notifier).await {
                notes.set(loaded);
            }
        });
    });

    let save_sync = sync.clone();
    let handle_save = move |request: SaveRequest| {
        let sync = save_sync.clone();
        let mut notifier = notifier;
        spawn(async move {
            if let Some(reloaded) = sync.save(request, &mut notifier).await {
                notes.set(reloaded);
            }
            dialog_open.set(false);
            selected.set(None);
        });
    };

    let delete_sync = sync.clone();
    let handle_delete = move |id: u32| {
        let sync = delete_sync.clone();
        let mut notifier = notifier;
        spawn(async move {
            if let Some(reloaded) = sync.delete(Some(id), &mut notifier).await {
                notes.set(reloaded);
            }
        });
    };

    rsx! {
        main { class: "notes-page",
            button {
                class: "button button-primary new-note",
                r#type: "button",
                onclick: move |_| {
                    selected.set(None);
                    dialog_open.set(true);
                },
                "New Note"
            }

            NotesTable {
                notes: notes(),
                on_edit: move |note: Note| {
                    selected.set(Some(note));
                    dialog_open.set(true);
                },
                on_delete: handle_delete,
            }

            if dialog_open() {
                NoteDialog {
                    selected: selected(),
                    on_save: handle_save,
                    on_close: move |_| {
                        dialog_open.set(false);
                        selected.set(None);
                    },
                }
            }
        }
    }
}
