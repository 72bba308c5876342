use axum::http::{Method, StatusCode};

mod common;

use common::{send, setup};

#[tokio::test]
async fn can_check_health_endpoint() {
    let ctx = setup();
    let request = axum::http::Request::builder()
        .uri("/health")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(ctx.app.clone(), request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(std::str::from_utf8(&body).unwrap(), "OK");
}

#[tokio::test]
async fn can_serve_openapi_document() {
    let ctx = setup();

    let response = send(&ctx.app, Method::GET, "/api/openapi.json", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["openapi"].as_str().unwrap().starts_with("3."));
    assert!(response.body["paths"]["/api/notes"]["post"].is_object());
    assert!(response.body["paths"]["/api/notes/{id}"]["delete"].is_object());
}

#[tokio::test]
async fn can_return_not_found_for_unknown_route() {
    let ctx = setup();

    let response = send(&ctx.app, Method::GET, "/nothing-here", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
