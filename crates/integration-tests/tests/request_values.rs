//! Request-scoped values set by middleware, driven through `oneshot`

mod harness;

use axum::body::Body;
use faultline_config::Config;
use harness::app::{self, AppState};
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(router: axum::Router, request: Request<Body>) -> (StatusCode, http::HeaderMap, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, headers, serde_json::from_slice(&bytes).unwrap())
}

fn get(path: &str) -> http::request::Builder {
    Request::builder().method("GET").uri(path)
}

fn router() -> axum::Router {
    app::router(AppState::new("orders"))
}

#[tokio::test]
async fn status_override_applies_to_success() {
    let request = get("/orders/1").header("x-async", "1").body(Body::empty()).unwrap();
    let (status, _, body) = send(router(), request).await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["item"], "keyboard");
}

#[tokio::test]
async fn status_override_applies_to_known_errors() {
    let request = get("/orders/9").header("x-async", "true").body(Body::empty()).unwrap();
    let (status, _, body) = send(router(), request).await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["message"], "not found");
}

#[tokio::test]
async fn status_override_skips_internal_fallback() {
    let request = get("/upstream/plain").header("x-async", "true").body(Body::empty()).unwrap();
    let (status, _, _) = send(router(), request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn unparsable_flag_leaves_status_alone() {
    let request = get("/orders/1").header("x-async", "soon").body(Body::empty()).unwrap();
    let (status, _, _) = send(router(), request).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn custom_headers_reach_the_client() {
    for path in ["/orders/1", "/orders/5", "/upstream/rpc"] {
        let request = get(path).header("x-request-id", "req-77").body(Body::empty()).unwrap();
        let (_, headers, _) = send(router(), request).await;

        assert_eq!(headers["x-request-id"], "req-77", "{path}");
        assert!(!headers.contains_key("handler-attribute-x-request-id"));
    }
}

#[tokio::test]
async fn configured_service_hides_details() {
    let config = Config::from_toml(
        r#"
        [service]
        name = "orders"
        hide_details = true

        [response]
        default_content_type = "application/problem+json"
        "#,
    )
    .unwrap();

    let request = get("/orders/5").body(Body::empty()).unwrap();
    let (status, headers, body) = send(app::router(AppState::from_config(&config)), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(headers["content-type"], "application/problem+json");
    assert_eq!(body, json!({"code": 2, "message": "not found"}));
}
