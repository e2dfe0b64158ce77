// src/presentation/http/extractors.rs
use crate::context::RequestContext;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

/// Hands handlers the context attached by `persist_context`, falling back to
/// [`RequestContext::background`] when the middleware did not run.
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_extensions(&parts.extensions))
    }
}
