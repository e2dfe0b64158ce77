// src/presentation/http/middleware/json_headers.rs
use crate::context::RequestContext;
use crate::presentation::http::error::{ErrorCode, HttpError};
use axum::{
    body::HttpBody,
    extract::Request,
    http::{HeaderMap, Method, header::CONTENT_TYPE},
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{ContentLength, HeaderMapExt};
use tracing::info;

const JSON_MEDIA_TYPE: &str = "application/json";
const ALLOWED_CONTENT_TYPES: [&str; 2] = ["application/json", "application/json;charset=utf-8"];

/// Rejects body-carrying requests that are not JSON with 415. The rest of
/// the chain does not run for a rejected request.
pub async fn force_json(req: Request, next: Next) -> Response {
    if carries_body(&req) && !is_json_content_type(req.headers()) {
        let ctx = RequestContext::from_extensions(req.extensions());
        info!(parent: ctx.span(), method = %req.method(), "rejecting non-json request body");
        return HttpError::from_code(ErrorCode::UnsupportedMediaType, "nil").into_response();
    }
    next.run(req).await
}

fn carries_body(req: &Request) -> bool {
    if !matches!(*req.method(), Method::POST | Method::PUT | Method::PATCH) {
        return false;
    }
    match req.headers().typed_get::<ContentLength>() {
        Some(ContentLength(len)) => len > 0,
        // without a length header only a body known to be empty passes
        None => req.body().size_hint().exact() != Some(0),
    }
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let normalized = value.trim().to_ascii_lowercase();
    if ALLOWED_CONTENT_TYPES.contains(&normalized.as_str()) {
        return true;
    }
    normalized
        .split(';')
        .next()
        .is_some_and(|media_type| media_type.trim() == JSON_MEDIA_TYPE)
}
