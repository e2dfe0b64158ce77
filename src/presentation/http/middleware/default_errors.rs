// src/presentation/http/middleware/default_errors.rs
use crate::presentation::http::error::{ErrorCode, HttpError};

/// Fallback for paths no route matches.
pub async fn no_route() -> HttpError {
    HttpError::from_code(ErrorCode::NotFound, "nil")
}

/// Fallback for a known path requested with a method it does not serve.
pub async fn no_method() -> HttpError {
    HttpError::from_code(ErrorCode::MethodNotAllowed, "nil")
}
