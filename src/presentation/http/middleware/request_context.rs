// src/presentation/http/middleware/request_context.rs
use crate::context::{RequestContext, generate_request_id};
use axum::{
    extract::Request,
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// First stage of the chain. Builds the [`RequestContext`], attaches it to the
/// request and echoes the request id on the response. Never fails.
pub async fn persist_context(mut req: Request, next: Next) -> Response {
    let ctx = RequestContext::new(current_request_id(req.headers()));
    req.extensions_mut().insert(ctx.clone());

    let mut response = next.run(req).instrument(ctx.span().clone()).await;

    if let Ok(value) = HeaderValue::from_str(ctx.request_id()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

fn current_request_id(headers: &HeaderMap) -> String {
    headers
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map_or_else(generate_request_id, str::to_owned)
}
