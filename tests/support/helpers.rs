// tests/support/helpers.rs
use std::sync::Arc;

use article_api::application::services::ApplicationServices;
use article_api::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use article_api::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::mocks::InMemoryArticleRepo;

pub fn build_test_state<R>(repo: Arc<R>) -> HttpState
where
    R: ArticleWriteRepository + ArticleReadRepository + 'static,
{
    let article_write: Arc<dyn ArticleWriteRepository> = repo.clone();
    let article_read: Arc<dyn ArticleReadRepository> = repo;

    HttpState {
        services: Arc::new(ApplicationServices::new(article_write, article_read)),
    }
}

pub fn make_router_with<R>(repo: Arc<R>) -> Router
where
    R: ArticleWriteRepository + ArticleReadRepository + 'static,
{
    build_router(build_test_state(repo))
}

/// Router over a fresh in-memory store.
pub fn make_test_router() -> Router {
    make_router_with(Arc::new(InMemoryArticleRepo::default()))
}

pub async fn send(app: &Router, req: Request<Body>) -> Response {
    app.clone().oneshot(req).await.unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub async fn body_string(resp: Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub async fn read_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_owned();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let text = body_string(resp).await;
    let json = serde_json::from_str(&text).unwrap_or_else(|_| panic!("invalid json body: {text}"));
    (status, json)
}

/// Assert an `{"code","description","field"}` error body with the given status.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_code: &str,
    expected_field: &str,
) -> Value {
    let (status, json) = read_json(resp).await;
    assert_eq!(status, expected_status, "unexpected status, body: {json}");
    assert_eq!(json["code"], expected_code, "unexpected code, body: {json}");
    assert_eq!(json["field"], expected_field, "unexpected field, body: {json}");
    assert!(
        json["description"].as_str().is_some_and(|d| !d.is_empty()),
        "expected non-empty description, body: {json}"
    );
    json
}
