// src/presentation/http/middleware/request_logger.rs
use crate::context::RequestContext;
use axum::{
    extract::{ConnectInfo, Request},
    http::HeaderMap,
    response::Response,
};
use headers::{HeaderMapExt, UserAgent};
use std::{net::SocketAddr, time::Duration};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::{DefaultOnBodyChunk, DefaultOnEos, TraceLayer},
};
use tracing::{Span, info, info_span};

pub type RequestLoggerLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    fn(&Request) -> Span,
    fn(&Request, &Span),
    fn(&Response, Duration, &Span),
    DefaultOnBodyChunk,
    DefaultOnEos,
    (),
>;

/// Access log: one line before the request is handled and one after. The
/// span is a child of the request's context span, so both lines carry
/// `req_id`. Error statuses are reported by the completion line only.
pub fn request_logger() -> RequestLoggerLayer {
    TraceLayer::new_for_http()
        .make_span_with(request_span as fn(&Request) -> Span)
        .on_request(log_started as fn(&Request, &Span))
        .on_response(log_completed as fn(&Response, Duration, &Span))
        .on_failure(())
}

fn request_span(req: &Request) -> Span {
    let ctx = RequestContext::from_extensions(req.extensions());
    let user_agent = req
        .headers()
        .typed_get::<UserAgent>()
        .map(|ua| ua.as_str().to_owned())
        .unwrap_or_default();

    info_span!(
        parent: ctx.span(),
        "http",
        method = %req.method(),
        path = %req.uri().path(),
        ip = %client_ip(req),
        user_agent = %user_agent,
    )
}

fn log_started(_req: &Request, span: &Span) {
    info!(parent: span, "request started");
}

fn log_completed(res: &Response, latency: Duration, span: &Span) {
    info!(
        parent: span,
        status = res.status().as_u16(),
        duration = ?latency,
        "request completed"
    );
}

/// Proxy headers first, then the socket peer.
fn client_ip(req: &Request) -> String {
    forwarded_ip(req.headers())
        .or_else(|| {
            req.extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
        })
        .unwrap_or_default()
}

fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    let first_forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    first_forwarded
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
        })
        .map(str::to_owned)
}
