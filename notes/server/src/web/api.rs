use crate::note::NoteState;
use crate::note::api::{NoteJson, NotePayload};
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// JSON body of every API error response.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: String) -> Self {
        Self { message }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::note::api::create_note_handler,
        crate::note::api::list_notes_handler,
        crate::note::api::get_note_handler,
        crate::note::api::update_note_handler,
        crate::note::api::delete_note_handler,
    ),
    components(schemas(NoteJson, NotePayload, ErrorResponse)),
    tags((name = "Notes", description = "Create, read, update and delete notes"))
)]
pub struct ApiDoc;

/// Handler for GET /api/openapi.json - Returns the generated OpenAPI document.
#[tracing::instrument]
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Creates the API routes for JSON API endpoints.
pub fn create_api_router(note_state: NoteState) -> Router {
    let notes_router = crate::note::api::create_api_router(note_state);
    let api_routes = notes_router.route("/openapi.json", get(openapi_handler));
    Router::new().nest("/api", api_routes)
}
