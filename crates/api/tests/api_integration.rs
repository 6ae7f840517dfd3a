//! Integration tests for the API server.

use std::sync::Arc;

use api::routes::index::AppState;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use gateway::{InMemoryGateway, STATUS_MESSAGE};
use tower::ServiceExt;

fn setup(gateway: InMemoryGateway) -> axum::Router {
    api::create_app(Arc::new(AppState { gateway }))
}

async fn send(app: axum::Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_health_check() {
    let (status, json) = send(setup(InMemoryGateway::new()), "GET", "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_health_check_ignores_database() {
    let gateway = InMemoryGateway::failing("connection refused");
    let (status, json) = send(setup(gateway.clone()), "GET", "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(gateway.calls(), 0);
}

#[tokio::test]
async fn test_index_returns_message() {
    let gateway = InMemoryGateway::new();
    let (status, json) = send(setup(gateway.clone()), "GET", "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "message": STATUS_MESSAGE }));
    assert_eq!(gateway.calls(), 1);
}

#[tokio::test]
async fn test_index_passes_message_through() {
    let (status, json) = send(setup(InMemoryGateway::with_message("degraded")), "GET", "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "degraded");
}

#[tokio::test]
async fn test_index_failure_returns_500_with_error() {
    let gateway = InMemoryGateway::failing("could not connect to server");
    let (status, json) = send(setup(gateway.clone()), "GET", "/").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json,
        serde_json::json!({ "error": "status unavailable: could not connect to server" })
    );
    assert!(json.get("message").is_none());
    assert_eq!(gateway.calls(), 1);
}

#[tokio::test]
async fn test_index_recovers_without_restart() {
    let gateway = InMemoryGateway::failing("database restarting");
    let app = setup(gateway.clone());

    let (status, _) = send(app.clone(), "GET", "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    gateway.set_failure(None);
    let (status, json) = send(app, "GET", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], STATUS_MESSAGE);
    assert_eq!(gateway.calls(), 2);
}

#[tokio::test]
async fn test_concurrent_index_requests() {
    let gateway = InMemoryGateway::new();
    let app = setup(gateway.clone());

    let requests = (0..50).map(|_| send(app.clone(), "GET", "/"));
    let responses = futures_util::future::join_all(requests).await;

    for (status, json) in responses {
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], STATUS_MESSAGE);
    }
    assert_eq!(gateway.calls(), 50);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, _) = send(setup(InMemoryGateway::new()), "GET", "/status").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_post_to_index_is_not_allowed() {
    let gateway = InMemoryGateway::new();
    let (status, _) = send(setup(gateway.clone()), "POST", "/").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(gateway.calls(), 0);
}
