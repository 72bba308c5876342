use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A persisted note. Only the store hands these out, so `id` and `created` are always set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Note {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: NoteStatus,
    pub created: String,
}

/// The user-editable part of a note, i.e. a note that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NoteDraft {
    pub title: String,
    pub description: String,
    pub status: NoteStatus,
}

/// Lifecycle status of a note.
///
/// The server stores whatever status a client sends, so any value other than
/// `active` or `completed` is carried verbatim in [`NoteStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NoteStatus {
    #[default]
    Active,
    Completed,
    #[cfg_attr(feature = "serde", serde(untagged))]
    Other(String),
}

impl NoteStatus {
    /// The statuses a user can pick from.
    pub const SELECTABLE: [NoteStatus; 2] = [NoteStatus::Active, NoteStatus::Completed];

    pub fn as_str(&self) -> &str {
        match self {
            NoteStatus::Active => "active",
            NoteStatus::Completed => "completed",
            NoteStatus::Other(status) => status,
        }
    }

    /// Human readable label, e.g. for a select option.
    pub fn label(&self) -> &str {
        match self {
            NoteStatus::Active => "Active",
            NoteStatus::Completed => "Completed",
            NoteStatus::Other(status) => status,
        }
    }
}

impl fmt::Display for NoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "active" => NoteStatus::Active,
            "completed" => NoteStatus::Completed,
            other => NoteStatus::Other(other.to_string()),
        })
    }
}

impl NoteDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: NoteStatus,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status,
        }
    }
}

impl Note {
    /// Copies the editable fields of this note into a draft.
    pub fn draft(&self) -> NoteDraft {
        NoteDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status.clone(),
        }
    }

    /// Replaces the editable fields with the ones from `draft`, leaving `id` and `created` alone.
    pub fn merge(self, draft: NoteDraft) -> Self {
        Self {
            title: draft.title,
            description: draft.description,
            status: draft.status,
            ..self
        }
    }
}
