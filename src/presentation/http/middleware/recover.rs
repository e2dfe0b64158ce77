// src/presentation/http/middleware/recover.rs
use crate::context::RequestContext;
use crate::presentation::http::error::HttpError;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use futures::FutureExt;
use std::{any::Any, backtrace::Backtrace, panic::AssertUnwindSafe};
use tracing::error;

/// Single per-request guard around everything downstream. A panic is logged
/// with its payload and a backtrace, and the client gets a plain 500.
pub async fn recover(req: Request, next: Next) -> Response {
    let ctx = RequestContext::from_extensions(req.extensions());

    match AssertUnwindSafe(next.run(req)).catch_unwind().await {
        Ok(response) => response,
        Err(payload) => {
            let backtrace = Backtrace::force_capture();
            error!(
                parent: ctx.span(),
                panic = %panic_message(payload.as_ref()),
                stacktrace = %backtrace,
                "[panic]"
            );
            HttpError::internal().into_response()
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}
