// src/presentation/http/routes.rs
use crate::presentation::http::controllers::articles;
use crate::presentation::http::middleware::{
    force_json, no_method, no_route, persist_context, recover, request_logger,
};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    middleware::from_fn,
    routing::get,
};
use tower::ServiceBuilder;

/// Builds the service router.
///
/// Middleware runs top to bottom: `persist_context` wraps everything,
/// `recover` sits closest to the handlers. The fallbacks pass through the
/// same chain.
pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route(
            "/articles/",
            get(articles::list_articles)
                .post(articles::create_article)
                .fallback(no_method),
        )
        .route(
            "/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .fallback(no_method),
        )
        .fallback(no_route)
        .layer(Extension(state))
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(persist_context))
                .layer(request_logger())
                .layer(from_fn(force_json))
                .layer(from_fn(recover)),
        )
}
