use crate::note::{NoteError, NoteState};
use crate::web::api::ErrorResponse;
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use notes_core::{Note, NoteDraft, NoteStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON representation of a Note for API responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NoteJson {
    /// Unique identifier assigned by the server
    id: u32,
    /// Title of the note
    title: String,
    /// Body text of the note
    description: String,
    /// Either `active` or `completed`
    #[schema(value_type = String, example = "active")]
    status: NoteStatus,
    /// Time the note was created or last updated
    created: String,
}

impl From<Note> for NoteJson {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            description: note.description,
            status: note.status,
            created: note.created,
        }
    }
}

/// Request body for creating or updating a note. Unknown fields are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NotePayload {
    title: String,
    description: String,
    #[schema(value_type = String, example = "active")]
    status: NoteStatus,
}

impl From<NotePayload> for NoteDraft {
    fn from(payload: NotePayload) -> Self {
        NoteDraft::new(payload.title, payload.description, payload.status)
    }
}

/// Error returned by the note handlers.
#[derive(Debug, thiserror::Error)]
pub enum NoteApiError {
    /// The id does not name an existing note, or is not a number at all.
    #[error("Note not found")]
    NotFound,
}

impl From<NoteError> for NoteApiError {
    fn from(err: NoteError) -> Self {
        match err {
            NoteError::NotFound(_) => NoteApiError::NotFound,
        }
    }
}

impl IntoResponse for NoteApiError {
    fn into_response(self) -> Response {
        match self {
            NoteApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(self.to_string())),
            )
                .into_response(),
        }
    }
}

/// Reads the id from the leading digits of the path segment, so `4abc` names note 4.
///
/// Segments without a leading digit are treated like ids that do not exist.
fn parse_id(raw: &str) -> Result<u32, NoteApiError> {
    let digits = raw
        .find(|c: char| !c.is_ascii_digit())
        .map_or(raw, |end| &raw[..end]);
    digits.parse().map_err(|_| {
        tracing::warn!("Rejected non-numeric note id {:?}", raw);
        NoteApiError::NotFound
    })
}

/// Handler for POST /api/notes - Creates a note.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    post,
    path = "/api/notes",
    request_body = NotePayload,
    responses(
        (status = 201, description = "Note created", body = NoteJson)
    ),
    tag = "Notes"
)]
pub async fn create_note_handler(
    State(state): State<NoteState>,
    Json(payload): Json<NotePayload>,
) -> (StatusCode, Json<NoteJson>) {
    let note = state.notes.write().await.create(payload.into());
    (StatusCode::CREATED, Json(note.into()))
}

/// Handler for GET /api/notes - Returns all notes in insertion order.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/api/notes",
    responses(
        (status = 200, description = "All notes", body = Vec<NoteJson>)
    ),
    tag = "Notes"
)]
pub async fn list_notes_handler(State(state): State<NoteState>) -> Json<Vec<NoteJson>> {
    let notes = state.notes.read().await.list();
    Json(notes.into_iter().map(NoteJson::from).collect())
}

/// Handler for GET /api/notes/{id} - Returns a single note.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/api/notes/{id}",
    params(("id" = u32, Path, description = "Note id")),
    responses(
        (status = 200, description = "The note", body = NoteJson),
        (status = 404, description = "Note not found", body = ErrorResponse)
    ),
    tag = "Notes"
)]
pub async fn get_note_handler(
    State(state): State<NoteState>,
    Path(id): Path<String>,
) -> Result<Json<NoteJson>, NoteApiError> {
    let id = parse_id(&id)?;
    let note = state.notes.read().await.get(id)?;
    Ok(Json(note.into()))
}

/// Handler for PUT /api/notes/{id} - Replaces the editable fields of a note.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    put,
    path = "/api/notes/{id}",
    params(("id" = u32, Path, description = "Note id")),
    request_body = NotePayload,
    responses(
        (status = 200, description = "The updated note", body = NoteJson),
        (status = 404, description = "Note not found", body = ErrorResponse)
    ),
    tag = "Notes"
)]
pub async fn update_note_handler(
    State(state): State<NoteState>,
    Path(id): Path<String>,
    Json(payload): Json<NotePayload>,
) -> Result<Json<NoteJson>, NoteApiError> {
    let id = parse_id(&id)?;
    let note = state.notes.write().await.update(id, payload.into())?;
    Ok(Json(note.into()))
}

/// Handler for DELETE /api/notes/{id} - Removes a note and returns it.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    params(("id" = u32, Path, description = "Note id")),
    responses(
        (status = 200, description = "The deleted note", body = NoteJson),
        (status = 404, description = "Note not found", body = ErrorResponse)
    ),
    tag = "Notes"
)]
pub async fn delete_note_handler(
    State(state): State<NoteState>,
    Path(id): Path<String>,
) -> Result<Json<NoteJson>, NoteApiError> {
    let id = parse_id(&id)?;
    let note = state.notes.write().await.delete(id)?;
    Ok(Json(note.into()))
}

/// Creates and returns the notes API router.
pub fn create_api_router(state: NoteState) -> Router {
    Router::new()
        .route(
            "/notes",
            get(list_notes_handler).post(create_note_handler),
        )
        .route("/notes/", axum::routing::post(create_note_handler))
        .route(
            "/notes/{id}",
            get(get_note_handler)
                .put(update_note_handler)
                .delete(delete_note_handler),
        )
        .with_state(state)
}
