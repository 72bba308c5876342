//! Turns user actions into API calls and keeps the displayed list in step with the server.
//!
//! Every action issues exactly one call. After a successful mutation the whole list is fetched
//! again, nothing is patched locally. Failures are reported with a generic message per action
//! and are never retried.

use crate::api::{ApiError, NotesApi};
use notes_core::{Note, NotificationSink, SaveRequest};
use std::future::Future;

pub const LOADING_NOTES: &str = "Loading notes...";
pub const NOTES_FETCHED: &str = "Notes fetched successfully.";
pub const FETCH_FAILED: &str = "Could not fetch data";

/// Messages shown while and after running one kind of mutation.
struct ActionMessages {
    loading: &'static str,
    success: &'static str,
    failure: &'static str,
}

const CREATE: ActionMessages = ActionMessages {
    loading: "Saving note...",
    success: "Note saved successfully.",
    failure: "Could not save note",
};

const UPDATE: ActionMessages = ActionMessages {
    loading: "Updating note...",
    success: "Note updated successfully",
    failure: "Could not update note",
};

const DELETE: ActionMessages = ActionMessages {
    loading: "Deleting note...",
    success: "Note deleted successfully.",
    failure: "Could not delete note",
};

#[derive(Debug, Clone)]
pub struct NoteSync<A> {
    api: A,
}

impl<A: NotesApi> NoteSync<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Loads the full list of notes.
    ///
    /// Returns `None` on failure, in which case whatever the caller shows should stay as is.
    pub async fn fetch(&self, notifier: &mut impl NotificationSink) -> Option<Vec<Note>> {
        notifier.notify_loading(LOADING_NOTES);
        match self.api.list_notes().await {
            Ok(notes) => {
                notifier.close();
                notifier.notify_success(NOTES_FETCHED);
                Some(notes)
            }
            Err(err) => {
                tracing::error!("Failed to fetch notes: {}", err);
                notifier.close();
                notifier.notify_error(FETCH_FAILED);
                None
            }
        }
    }

    /// Creates or updates a note, then reloads the list.
    ///
    /// The action's success is reported even when the reload fails; `None` then means the
    /// caller keeps showing what it has.
    pub async fn save(
        &self,
        request: SaveRequest,
        notifier: &mut impl NotificationSink,
    ) -> Option<Vec<Note>> {
        match request {
            SaveRequest::Update(note) => {
                let update = self.api.update_note(note.id, note.draft());
                self.mutate(&UPDATE, update, notifier).await
            }
            SaveRequest::Create(draft) => {
                let create = self.api.create_note(draft);
                self.mutate(&CREATE, create, notifier).await
            }
        }
    }

    /// Deletes a note, then reloads the list. Without an id nothing happens.
    pub async fn delete(
        &self,
        id: Option<u32>,
        notifier: &mut impl NotificationSink,
    ) -> Option<Vec<Note>> {
        let id = id?;
        let delete = self.api.delete_note(id);
        self.mutate(&DELETE, delete, notifier).await
    }

    async fn mutate<T>(
        &self,
        messages: &ActionMessages,
        mutation: impl Future<Output = Result<T, ApiError>>,
        notifier: &mut impl NotificationSink,
    ) -> Option<Vec<Note>> {
        notifier.notify_loading(messages.loading);
        if let Err(err) = mutation.await {
            tracing::error!("{}: {}", messages.failure, err);
            notifier.close();
            notifier.notify_error(messages.failure);
            return None;
        }

        let notes = self.fetch(notifier).await;
        notifier.close();
        notifier.notify_success(messages.success);
        notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockNotesApi;
    use mockall::predicate::eq;
    use notes_core::{NoteDraft, NoteStatus, Notifications, Severity};

    /// Sink that remembers everything it was asked to do.
    #[derive(Default)]
    struct RecordingSink {
        events: Vec<String>,
    }

    impl NotificationSink for RecordingSink {
        fn notify(&mut self, message: &str, severity: Severity) {
            self.events.push(format!("{severity:?}: {message}"));
        }

        fn notify_loading(&mut self, message: &str) {
            self.events.push(format!("Loading: {message}"));
        }

        fn close(&mut self) {
            self.events.push("Close".to_string());
        }
    }

    fn note(id: u32, title: &str) -> Note {
        Note {
            id,
            title: title.to_string(),
            description: format!("{title} description"),
            status: NoteStatus::Active,
            created: "10/17/2026, 9:00:00 AM".to_string(),
        }
    }

    fn current_message(notifications: &Notifications) -> (Severity, String) {
        let current = notifications.current().expect("a notification is shown");
        (current.severity(), current.message().to_string())
    }

    #[tokio::test]
    async fn can_fetch_notes_and_report_success() {
        let mut api = MockNotesApi::new();
        api.expect_list_notes()
            .times(1)
            .returning(|| Ok(vec![note(1, "Note1")]));
        let sync = NoteSync::new(api);
        let mut sink = RecordingSink::default();

        let notes = sync.fetch(&mut sink).await;

        assert_eq!(notes, Some(vec![note(1, "Note1")]));
        assert_eq!(
            sink.events,
            vec![
                "Loading: Loading notes...",
                "Close",
                "Success: Notes fetched successfully."
            ]
        );
    }

    #[tokio::test]
    async fn can_report_fetch_failure_and_return_nothing() {
        let mut api = MockNotesApi::new();
        api.expect_list_notes()
            .times(1)
            .returning(|| Err(ApiError::Status(500)));
        let sync = NoteSync::new(api);
        let mut notifications = Notifications::new();

        let notes = sync.fetch(&mut notifications).await;

        assert_eq!(notes, None);
        assert_eq!(
            current_message(&notifications),
            (Severity::Error, "Could not fetch data".to_string())
        );
    }

    #[tokio::test]
    async fn can_create_note_then_reload_list() {
        let mut api = MockNotesApi::new();
        let draft = NoteDraft::new("A", "B", NoteStatus::Active);
        api.expect_create_note()
            .with(eq(draft.clone()))
            .times(1)
            .returning(|_| Ok(note(4, "A")));
        api.expect_list_notes()
            .times(1)
            .returning(|| Ok(vec![note(1, "Note1"), note(4, "A")]));
        let sync = NoteSync::new(api);
        let mut sink = RecordingSink::default();

        let notes = sync.save(SaveRequest::Create(draft), &mut sink).await;

        assert_eq!(notes.map(|notes| notes.len()), Some(2));
        assert_eq!(
            sink.events,
            vec![
                "Loading: Saving note...",
                "Loading: Loading notes...",
                "Close",
                "Success: Notes fetched successfully.",
                "Close",
                "Success: Note saved successfully."
            ]
        );
    }

    #[tokio::test]
    async fn can_update_note_with_its_id_and_fields() {
        let mut api = MockNotesApi::new();
        let edited = Note {
            title: "A2".to_string(),
            status: NoteStatus::Completed,
            ..note(4, "A")
        };
        api.expect_update_note()
            .withf(|id, draft| {
                *id == 4 && draft.title == "A2" && draft.status == NoteStatus::Completed
            })
            .times(1)
            .returning(|id, draft| {
                Ok(Note {
                    id,
                    title: draft.title,
                    description: draft.description,
                    status: draft.status,
                    created: "10/17/2026, 9:05:00 AM".to_string(),
                })
            });
        api.expect_list_notes().times(1).returning(|| Ok(vec![]));
        let sync = NoteSync::new(api);
        let mut notifications = Notifications::new();

        let notes = sync
            .save(SaveRequest::Update(edited), &mut notifications)
            .await;

        assert_eq!(notes, Some(vec![]));
        assert_eq!(
            current_message(&notifications),
            (Severity::Success, "Note updated successfully".to_string())
        );
    }

    #[tokio::test]
    async fn can_skip_reload_when_update_fails() {
        let mut api = MockNotesApi::new();
        api.expect_update_note()
            .times(1)
            .returning(|_, _| Err(ApiError::Status(404)));
        api.expect_list_notes().times(0);
        let sync = NoteSync::new(api);
        let mut sink = RecordingSink::default();

        let notes = sync
            .save(SaveRequest::Update(note(9, "gone")), &mut sink)
            .await;

        assert_eq!(notes, None);
        assert_eq!(
            sink.events,
            vec![
                "Loading: Updating note...",
                "Close",
                "Error: Could not update note"
            ]
        );
    }

    #[tokio::test]
    async fn can_report_create_failure() {
        let mut api = MockNotesApi::new();
        api.expect_create_note()
            .times(1)
            .returning(|_| Err(ApiError::Status(503)));
        api.expect_list_notes().times(0);
        let sync = NoteSync::new(api);
        let mut notifications = Notifications::new();

        let notes = sync
            .save(SaveRequest::Create(NoteDraft::default()), &mut notifications)
            .await;

        assert_eq!(notes, None);
        assert_eq!(
            current_message(&notifications),
            (Severity::Error, "Could not save note".to_string())
        );
    }

    #[tokio::test]
    async fn can_delete_note_then_reload_list() {
        let mut api = MockNotesApi::new();
        api.expect_delete_note()
            .with(eq(2))
            .times(1)
            .returning(|id| Ok(note(id, "Note2")));
        api.expect_list_notes()
            .times(1)
            .returning(|| Ok(vec![note(1, "Note1"), note(3, "Note3")]));
        let sync = NoteSync::new(api);
        let mut notifications = Notifications::new();

        let notes = sync.delete(Some(2), &mut notifications).await;

        assert_eq!(notes, Some(vec![note(1, "Note1"), note(3, "Note3")]));
        assert_eq!(
            current_message(&notifications),
            (Severity::Success, "Note deleted successfully.".to_string())
        );
    }

    #[tokio::test]
    async fn can_report_delete_failure() {
        let mut api = MockNotesApi::new();
        api.expect_delete_note()
            .times(1)
            .returning(|_| Err(ApiError::Status(404)));
        api.expect_list_notes().times(0);
        let sync = NoteSync::new(api);
        let mut notifications = Notifications::new();

        let notes = sync.delete(Some(42), &mut notifications).await;

        assert_eq!(notes, None);
        assert_eq!(
            current_message(&notifications),
            (Severity::Error, "Could not delete note".to_string())
        );
    }

    #[tokio::test]
    async fn can_ignore_delete_without_id() {
        let mut api = MockNotesApi::new();
        api.expect_delete_note().times(0);
        api.expect_list_notes().times(0);
        let sync = NoteSync::new(api);
        let mut sink = RecordingSink::default();

        let notes = sync.delete(None, &mut sink).await;

        assert_eq!(notes, None);
        assert!(sink.events.is_empty());
    }

    #[tokio::test]
    async fn can_report_delete_success_when_reload_fails() {
        let mut api = MockNotesApi::new();
        api.expect_delete_note()
            .times(1)
            .returning(|id| Ok(note(id, "Note1")));
        api.expect_list_notes()
            .times(1)
            .returning(|| Err(ApiError::Status(500)));
        let sync = NoteSync::new(api);
        let mut sink = RecordingSink::default();

        let notes = sync.delete(Some(1), &mut sink).await;

        assert_eq!(notes, None);
        assert_eq!(
            sink.events,
            vec![
                "Loading: Deleting note...",
                "Loading: Loading notes...",
                "Close",
                "Error: Could not fetch data",
                "Close",
                "Success: Note deleted successfully."
            ]
        );
    }

    #[tokio::test]
    async fn can_report_update_success_when_reload_fails() {
        let mut api = MockNotesApi::new();
        api.expect_update_note()
            .times(1)
            .returning(|id, _| Ok(note(id, "A2")));
        api.expect_list_notes()
            .times(1)
            .returning(|| Err(ApiError::Status(502)));
        let sync = NoteSync::new(api);
        let mut notifications = Notifications::new();

        let notes = sync
            .save(SaveRequest::Update(note(4, "A2")), &mut notifications)
            .await;

        assert_eq!(notes, None);
        assert_eq!(
            current_message(&notifications),
            (Severity::Success, "Note updated successfully".to_string())
        );
    }
}
