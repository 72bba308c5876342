use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::note::{NoteState, NoteStore};

pub mod api;

/// Builds the complete application: the notes API, the health check, request tracing and
/// permissive CORS.
pub fn create_app(note_state: NoteState) -> Router {
    Router::new()
        .route("/health", axum::routing::get(health_check_handler))
        .merge(api::create_api_router(note_state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

#[tracing::instrument(skip(config))]
pub async fn start_web_server(config: Config) -> anyhow::Result<()> {
    let server_address = config.address();
    let listener = tokio::net::TcpListener::bind(&server_address).await?;
    tracing::info!("Web server running on http://{}", server_address);

    let store = NoteStore::seeded();
    tracing::info!("Note store seeded with {} notes", store.len());

    let app = create_app(NoteState::new(store));

    axum::serve(listener, app).await?;
    Ok(())
}

#[tracing::instrument]
pub async fn health_check_handler() -> &'static str {
    "OK"
}
