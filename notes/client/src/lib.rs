//! Browser-side access to the notes API.
//!
//! [`HttpNotesApi`] issues the HTTP calls, [`NoteSync`] turns user actions into exactly one call
//! each, reloads the whole list after every mutation and reports the outcome through a
//! [`notes_core::NotificationSink`].
pub mod api;
pub mod sync;

pub use api::{ApiError, HttpNotesApi, NotesApi};
pub use sync::NoteSync;

/// Where the browser UI finds the API by default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
