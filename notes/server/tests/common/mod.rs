use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use notes_server::note::{NoteState, NoteStore};
use tower::ServiceExt;

/// Status, headers and decoded JSON body of a response.
pub struct JsonResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

/// Test context holding the store shared with the router.
pub struct TestContext {
    pub state: NoteState,
    pub app: Router,
}

/// Builds the full application around a store holding the three sample notes.
pub fn setup() -> TestContext {
    setup_with_store(NoteStore::seeded())
}

pub fn setup_with_store(store: NoteStore) -> TestContext {
    // Allow multiple calls to init for tests.
    let _ = tracing_subscriber::fmt().try_init();
    let state = NoteState::new(store);
    let app = notes_server::web::create_app(state.clone());
    TestContext { state, app }
}

/// Sends a request through a clone of the router and decodes the JSON answer.
///
/// Non-JSON bodies come back as `serde_json::Value::Null`.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> JsonResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    JsonResponse {
        status,
        headers,
        body,
    }
}
