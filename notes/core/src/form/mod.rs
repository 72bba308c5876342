//! Controlled form state for creating or editing a single note.

use crate::note::{Note, NoteDraft, NoteStatus};
use thiserror::Error;

/// Form fields that carry validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Description,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Description is required")]
    DescriptionRequired,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::TitleRequired => Field::Title,
            ValidationError::DescriptionRequired => Field::Description,
        }
    }
}

/// What a successful submit asks the API to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRequest {
    Create(NoteDraft),
    Update(Note),
}

/// Draft state behind the note dialog.
///
/// Opening with an existing note pre-fills the draft from it; opening without one starts from
/// an empty draft with status `active`. Saving an existing note merges the draft into the
/// original, so `id` and `created` travel along untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NoteForm {
    original: Option<Note>,
    draft: NoteDraft,
    errors: Vec<ValidationError>,
}

impl NoteForm {
    pub fn open(selected: Option<&Note>) -> Self {
        Self {
            original: selected.cloned(),
            draft: selected.map(Note::draft).unwrap_or_default(),
            errors: Vec::new(),
        }
    }

    pub fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.original.is_some()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_editing() {
            "Edit Note"
        } else {
            "New Note"
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
        self.clear_error(Field::Title);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
        self.clear_error(Field::Description);
    }

    pub fn set_status(&mut self, status: NoteStatus) {
        self.draft.status = status;
    }

    /// Statuses to offer for the draft: the selectable ones, plus the draft's own status when
    /// it is neither, so an untouched select keeps it.
    pub fn status_options(&self) -> Vec<NoteStatus> {
        let mut options = NoteStatus::SELECTABLE.to_vec();
        if !options.contains(&self.draft.status) {
            options.push(self.draft.status.clone());
        }
        options
    }

    /// The validation error currently shown for `field`, if any.
    pub fn error(&self, field: Field) -> Option<&ValidationError> {
        self.errors.iter().find(|error| error.field() == field)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Validates the draft and, if it is complete, turns it into a save request.
    ///
    /// On failure every offending field is marked and nothing else changes. On success the
    /// draft is reset to an empty one.
    pub fn submit(&mut self) -> Result<SaveRequest, Vec<ValidationError>> {
        let mut errors = Vec::new();
        if self.draft.title.is_empty() {
            errors.push(ValidationError::TitleRequired);
        }
        if self.draft.description.is_empty() {
            errors.push(ValidationError::DescriptionRequired);
        }
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }

        let draft = std::mem::take(&mut self.draft);
        let request = match &self.original {
            Some(original) => SaveRequest::Update(original.clone().merge(draft)),
            None => SaveRequest::Create(draft),
        };
        Ok(request)
    }

    fn clear_error(&mut self, field: Field) {
        self.errors.retain(|error| error.field() != field);
    }
}
