//! Core domain models for Notes: the note model itself, the note form and the
//! single-slot notification channel shared by the server and the browser UI.
pub mod form;
pub mod note;
pub mod notification;

pub use form::{Field, NoteForm, SaveRequest, ValidationError};
pub use note::{Note, NoteDraft, NoteStatus};
pub use notification::{Notification, NotificationSink, Notifications, Severity, Ticket};
