use dioxus::prelude::*;
use notes_core::{Field, Note, NoteForm, NoteStatus, SaveRequest};

/// Modal dialog for creating a note, or editing `selected` when given.
///
/// The form only calls `on_save` once title and description are filled in; otherwise the
/// offending fields are marked and the dialog stays open.
#[component]
pub fn NoteDialog(selected: Option<Note>, on_save: EventHandler<SaveRequest>, on_close: EventHandler<()>) -> Element {
    let mut form = use_signal(|| NoteForm::open(selected.as_ref()));

    let handle_save = move |_: MouseEvent| {
        let submitted = form.write().submit();
        if let Ok(request) = submitted {
            on_save.call(request);
        }
    };

    let current = form.read();
    let heading = current.heading();
    let draft = current.draft().clone();
    let status_options = current.status_options();
    let title_error = current.error(Field::Title).map(ToString::to_string);
    let description_error = current.error(Field::Description).map(ToString::to_string);
    drop(current);

    let title_class = if title_error.is_some() { "field field-error" } else { "field" };
    let description_class = if description_error.is_some() { "field field-error" } else { "field" };

    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |_| on_close.call(()),

            div {
                class: "dialog",
                onclick: move |evt| evt.stop_propagation(),

                h2 { class: "dialog-title", "{heading}" }

                div { class: "dialog-content",
                    label { class: "{title_class}",
                        span { "Title" }
                        input {
                            r#type: "text",
                            name: "title",
                            value: "{draft.title}",
                            oninput: move |evt: FormEvent| form.write().set_title(evt.value()),
                        }
                        if let Some(message) = title_error {
                            span { class: "helper-text", "{message}" }
                        }
                    }

                    label { class: "{description_class}",
                        span { "Description" }
                        input {
                            r#type: "text",
                            name: "description",
                            value: "{draft.description}",
                            oninput: move |evt: FormEvent| form.write().set_description(evt.value()),
                        }
                        if let Some(message) = description_error {
                            span { class: "helper-text", "{message}" }
                        }
                    }

                    label { class: "field",
                        span { "Status" }
                        select {
                            name: "status",
                            value: "{draft.status}",
                            onchange: move |evt: FormEvent| {
                                let status = evt.value().parse::<NoteStatus>().unwrap_or_default();
                                form.write().set_status(status);
                            },
                            for status in status_options {
                                option {
                                    key: "{status}",
                                    value: "{status}",
                                    selected: status == draft.status,
                                    "{status.label()}"
                                }
                            }
                        }
                    }
                }

                div { class: "dialog-actions",
                    button {
                        r#type: "button",
                        class: "button",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "button",
                        class: "button button-primary",
                        onclick: handle_save,
                        "Save"
                    }
                }
            }
        }
    }
}
