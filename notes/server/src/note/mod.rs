use notes_core::{Note, NoteDraft, NoteStatus};
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

pub mod api;

/// Produces the `created` timestamp for new and updated notes.
pub type Clock = Arc<dyn Fn() -> String + Send + Sync>;

/// Error type for NoteStore operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NoteError {
    /// Represents a note not found error.
    #[error("Note with ID {0} not found")]
    NotFound(u32),
}

/// Current local time in the `10/17/2026, 3:04:05 PM` style.
pub fn local_timestamp() -> String {
    chrono::Local::now()
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

/// The authoritative, in-memory collection of notes.
///
/// Notes are kept in insertion order. Ids come from a counter that only ever goes up, so an id
/// is never handed out twice, even after the note holding it was deleted.
pub struct NoteStore {
    notes: Vec<Note>,
    next_id: u32,
    clock: Clock,
}

impl fmt::Debug for NoteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoteStore")
            .field("notes", &self.notes)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    /// Creates an empty store stamping notes with the local time.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(local_timestamp))
    }

    /// Creates an empty store stamping notes with the given clock.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            notes: Vec::new(),
            next_id: 1,
            clock,
        }
    }

    /// Creates a store holding the three sample notes the server starts with.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.seed();
        store
    }

    fn seed(&mut self) {
        let samples = [
            ("Note1", "Note 1 description", NoteStatus::Active),
            ("Note2", "Note 2 description", NoteStatus::Completed),
            ("Note3", "Note 3 description", NoteStatus::Active),
        ];
        for (title, description, status) in samples {
            self.create(NoteDraft::new(title, description, status));
        }
    }

    /// Creates a new note.
    ///
    /// # Arguments
    ///
    /// * `draft` - Title, description and status of the note.
    ///
    /// # Returns
    ///
    /// The created `Note`, carrying its freshly assigned id and creation time.
    #[tracing::instrument(skip(self))]
    pub fn create(&mut self, draft: NoteDraft) -> Note {
        let note = Note {
            id: self.next_id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            created: (self.clock)(),
        };
        self.next_id += 1;
        self.notes.push(note.clone());
        tracing::info!("Created note {}", note.id);
        note
    }

    /// Returns every note in insertion order.
    pub fn list(&self) -> Vec<Note> {
        self.notes.clone()
    }

    /// Retrieves a note by its ID.
    #[tracing::instrument(skip(self))]
    pub fn get(&self, id: u32) -> Result<Note, NoteError> {
        self.notes
            .iter()
            .find(|note| note.id == id)
            .cloned()
            .ok_or(NoteError::NotFound(id))
    }

    /// Replaces title, description and status of a note and refreshes its `created` time.
    ///
    /// # Arguments
    ///
    /// * `id` - The ID of the note to update.
    /// * `draft` - The new editable fields.
    ///
    /// # Returns
    ///
    /// The updated `Note`, or `NoteError::NotFound` if no note has this id.
    #[tracing::instrument(skip(self))]
    pub fn update(&mut self, id: u32, draft: NoteDraft) -> Result<Note, NoteError> {
        let created = (self.clock)();
        let note = self.find_mut(id)?;
        *note = Note {
            created,
            ..note.clone().merge(draft)
        };
        tracing::info!("Updated note {}", id);
        Ok(note.clone())
    }

    /// Removes a note permanently.
    ///
    /// # Returns
    ///
    /// The removed `Note`, or `NoteError::NotFound` if no note has this id.
    #[tracing::instrument(skip(self))]
    pub fn delete(&mut self, id: u32) -> Result<Note, NoteError> {
        let index = self
            .notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(NoteError::NotFound(id))?;
        let note = self.notes.remove(index);
        tracing::info!("Deleted note {}", id);
        Ok(note)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn find_mut(&mut self, id: u32) -> Result<&mut Note, NoteError> {
        self.notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(NoteError::NotFound(id))
    }
}

/// Shared handle to the store, handed to the request handlers.
#[derive(Clone, Debug)]
pub struct NoteState {
    pub notes: Arc<RwLock<NoteStore>>,
}

impl NoteState {
    pub fn new(store: NoteStore) -> Self {
        Self {
            notes: Arc::new(RwLock::new(store)),
        }
    }
}
