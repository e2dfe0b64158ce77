// src/context.rs
//! Request-scoped context.
//!
//! A [`RequestContext`] is created once per inbound request by the
//! `persist_context` middleware and handed explicitly to every layer that
//! works on that request. It carries the request id and the request's
//! tracing span, which plays the role of a logger pre-tagged with `req_id`:
//! downstream code logs with `parent: ctx.span()`.
use axum::http::Extensions;
use std::sync::Arc;
use tracing::Span;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct RequestContext {
    request_id: Arc<str>,
    span: Span,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        let request_id: Arc<str> = Arc::from(request_id.into());
        let span = tracing::info_span!("request", req_id = %request_id);
        Self { request_id, span }
    }

    /// Context used when no request context was attached, e.g. when a layer
    /// runs outside the middleware chain. Logs go to the current span.
    pub fn background() -> Self {
        Self {
            request_id: Arc::from(""),
            span: Span::current(),
        }
    }

    /// Returns the context attached to a request, or [`Self::background`].
    pub fn from_extensions(extensions: &Extensions) -> Self {
        extensions
            .get::<Self>()
            .cloned()
            .unwrap_or_else(Self::background)
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

/// UUID v4 with the separators stripped.
pub fn generate_request_id() -> String {
    Uuid::new_v4().simple().to_string()
}
