mod empty_notes_state;
mod note_dialog;
mod notes_table;
mod notification_snackbar;

pub use empty_notes_state::EmptyNotesState;
pub use note_dialog::NoteDialog;
pub use notes_table::NotesTable;
pub use notification_snackbar::NotificationSnackbar;
